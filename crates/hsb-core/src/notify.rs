use async_trait::async_trait;

use crate::{domain::ChatId, Result};

/// Outbound messaging port.
///
/// Telegram is the first implementation; any failure must be mapped to
/// `Error::SendMessage` so the driver can route it log-only.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()>;
}
