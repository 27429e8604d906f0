use derive_getters::Getters;
use derive_new::new;
use reqwest::Client;

use crate::error::{Result, TngError};

/// Status line and body of one TNG reply, before any classification.
#[derive(Clone, Debug, Getters, new)]
pub struct RawResponse {
    status: u16,
    message: String,
    body: String,
}

impl RawResponse {
    pub fn into_body(self) -> String {
        self.body
    }
}

/// The one network operation the client needs. Behind a trait so hosts
/// and tests can supply their own transport.
pub trait Transport {
    async fn get(&self, url: &str) -> Result<RawResponse>;
}

/// Production transport backed by `reqwest`. Timeouts and pooling are
/// whatever reqwest defaults to; no retries.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TngError::Transport(Box::new(e)))?;

        let status = response.status();
        let message = status.canonical_reason().unwrap_or_default().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| TngError::Transport(Box::new(e)))?;

        Ok(RawResponse::new(status.as_u16(), message, body))
    }
}
