use std::sync::Arc;

use teloxide::Bot;
use tokio_util::sync::CancellationToken;

use hsb_core::{config::Config, watcher::StatusWatcher};
use hsb_practicum::PracticumClient;
use hsb_telegram::TelegramNotifier;

#[tokio::main]
async fn main() -> Result<(), hsb_core::Error> {
    hsb_core::logging::init("hsb");

    let cfg = match Config::load() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            // Fatal: never enter the loop without all three secrets.
            tracing::error!("{e}; the watcher will not start");
            return Err(e);
        }
    };
    tracing::info!("environment variables are present");

    let api = Arc::new(PracticumClient::new(&cfg));
    let notifier = Arc::new(TelegramNotifier::new(Bot::new(
        cfg.telegram_bot_token.clone(),
    )));
    let watcher = StatusWatcher::new(cfg, api, notifier);

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    watcher.run(cancel).await;
    Ok(())
}
