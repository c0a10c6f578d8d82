//! The polling driver: one linear fetch–validate–translate–notify loop.
//!
//! All mutable state (cursor, dedup strings) is owned here explicitly; there
//! are no globals. The loop never terminates on its own — only cancellation
//! (Ctrl-C in the binary) or process death stops it.

use std::sync::Arc;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::{
    api::HomeworkApi,
    config::Config,
    domain::PollCursor,
    errors::Error,
    notify::Notifier,
    response, status, Result,
};

pub struct StatusWatcher {
    cfg: Arc<Config>,
    api: Arc<dyn HomeworkApi>,
    notifier: Arc<dyn Notifier>,
}

/// Loop-local state. Dedup strings suppress repeat sends of an identical
/// message on consecutive cycles; they reset only on restart.
struct WatchState {
    cursor: PollCursor,
    last_status_message: String,
    last_error_message: String,
}

impl WatchState {
    fn new(cursor: PollCursor) -> Self {
        Self {
            cursor,
            last_status_message: String::new(),
            last_error_message: String::new(),
        }
    }
}

impl StatusWatcher {
    pub fn new(cfg: Arc<Config>, api: Arc<dyn HomeworkApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self { cfg, api, notifier }
    }

    /// Run until `cancel` fires. Every cycle fully completes before the
    /// retry sleep; no two cycles are ever in flight.
    pub async fn run(&self, cancel: CancellationToken) {
        tracing::info!(
            interval_secs = self.cfg.retry_interval.as_secs(),
            "starting homework status watcher"
        );

        let mut state = WatchState::new(PollCursor::now());
        loop {
            self.cycle(&mut state).await;

            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("shutdown requested, stopping watcher");
                    break;
                }
                _ = sleep(self.cfg.retry_interval) => {}
            }
        }
    }

    async fn cycle(&self, state: &mut WatchState) {
        if let Err(err) = self.poll_once(state).await {
            self.report_failure(state, err).await;
        }
    }

    async fn poll_once(&self, state: &mut WatchState) -> Result<()> {
        let response = self.api.fetch(state.cursor).await?;

        // Advance the cursor before validation: a malformed homework record
        // must not make us re-fetch the same window forever.
        if let Some(server_now) = response::current_date(&response) {
            state.cursor = PollCursor(server_now);
        }

        let Some(record) = response::extract_homework(&response)? else {
            return Ok(());
        };

        let message = status::status_message(&record)?;
        if message != state.last_status_message {
            tracing::info!(%message, "homework status changed");
            // Dedup updates before the send attempt: a failed delivery is not
            // retried with the same text on the next cycle.
            state.last_status_message = message.clone();
            self.notifier
                .send_text(self.cfg.telegram_chat_id, &message)
                .await?;
        }

        Ok(())
    }

    /// Generic-failure path. Send failures are terminal for the cycle:
    /// notification is exactly what just failed, so log-only.
    async fn report_failure(&self, state: &mut WatchState, err: Error) {
        if err.is_send_failure() {
            tracing::error!("telegram is unreachable: {err}");
            return;
        }

        let message = format!("Сбой в работе программы: {err}");
        if message == state.last_error_message {
            return;
        }

        tracing::error!("{message}");
        state.last_error_message = message.clone();
        if let Err(send_err) = self
            .notifier
            .send_text(self.cfg.telegram_chat_id, &message)
            .await
        {
            tracing::error!("failed to report the failure to telegram: {send_err}");
        }
    }
}
