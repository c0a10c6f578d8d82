//! Practicum homework API adapter.
//!
//! Implements the `hsb-core` HomeworkApi port over the homework-statuses
//! endpoint: OAuth header, `from_date` query, strict 200-or-error handling.

use async_trait::async_trait;

use hsb_core::{api::HomeworkApi, config::Config, domain::PollCursor, errors::Error, Result};

#[derive(Clone, Debug)]
pub struct PracticumClient {
    token: String,
    endpoint: String,
    http: reqwest::Client,
}

impl PracticumClient {
    pub fn new(cfg: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(cfg.request_timeout)
            .build()
            .expect("reqwest client build");
        Self {
            token: cfg.practicum_token.clone(),
            endpoint: cfg.endpoint_url.clone(),
            http,
        }
    }

    fn transport_err(&self, e: reqwest::Error) -> Error {
        tracing::error!("failed to reach {}: {e}", self.endpoint);
        Error::Endpoint {
            url: self.endpoint.clone(),
            cause: e.to_string(),
        }
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, from_date: PollCursor) -> Result<serde_json::Value> {
        let resp = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date.0)])
            .send()
            .await
            .map_err(|e| self.transport_err(e))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            tracing::error!(
                "endpoint {} with params from_date={} is unavailable: HTTP {status}",
                self.endpoint,
                from_date.0
            );
            return Err(Error::EndpointStatus {
                url: self.endpoint.clone(),
                from_date: from_date.0,
                status: status.as_u16(),
            });
        }

        // An undecodable body is a transport failure, not a validation one;
        // shape checks on the decoded value happen in hsb-core.
        resp.json::<serde_json::Value>()
            .await
            .map_err(|e| self.transport_err(e))
    }
}
