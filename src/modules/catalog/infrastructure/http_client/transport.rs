//! Outbound HTTP seam for catalog adapters
//!
//! The adapter only needs "GET this URL, give me status and body". Keeping that
//! behind a trait lets tests replay fixture payloads without a network.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::modules::catalog::domain::entities::CatalogConfig;

/// Raw response as received: status code plus undecoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, timeout, dropped body)
    #[error("no response: {0}")]
    NoResponse(String),

    #[error("transport error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() || err.is_body() {
            TransportError::NoResponse(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a single GET; no retries
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

/// Production transport backed by `reqwest`
pub struct ReqwestTransport {
    client: Client,
    user_agent: String,
}

impl ReqwestTransport {
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create transport with a preconfigured client
    pub fn with_client(client: Client, config: &CatalogConfig) -> Self {
        Self {
            client,
            user_agent: config.user_agent.clone(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await?;

        // Once a status line has arrived the response counts as received, even
        // if its body is cut short. Only a broken 2xx body is a transport error.
        let status = response.status().as_u16();
        let body = if response.status().is_success() {
            response.text().await?
        } else {
            response.text().await.unwrap_or_default()
        };

        log::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(TransportResponse { status, body })
    }
}
