use async_trait::async_trait;

use crate::{domain::PollCursor, Result};

/// Port over the homework-review API.
///
/// The adapter returns the raw JSON payload; shape validation lives in
/// `response` so malformed bodies surface as typed validation errors rather
/// than transport errors.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetch the status payload for submissions updated since `from_date`.
    async fn fetch(&self, from_date: PollCursor) -> Result<serde_json::Value>;
}
