//! HTTP client for the remote morphology lookup service.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ServiceConfig;
use crate::decoder::DetectResponse;

/// Errors raised by a word lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Connection to the lookup service failed
    #[error("failed to connect to lookup service: {0}")]
    Connection(String),

    /// The request could not be built or sent
    #[error("lookup request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status
    #[error("lookup service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The reply body was not a valid detect response
    #[error("malformed lookup reply: {0}")]
    MalformedReply(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() {
            LookupError::Connection(error.to_string())
        } else {
            LookupError::Request(error.to_string())
        }
    }
}

/// A source of per-word morphological classifications.
///
/// The analysis driver only depends on this trait, so tests can script
/// replies without a live service.
#[async_trait]
pub trait WordLookup {
    async fn detect(&self, word: &str) -> Result<DetectResponse, LookupError>;
}

/// [`WordLookup`] backed by the service's `GET /detect` endpoint.
pub struct HttpLookupClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpLookupClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| LookupError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.effective_base_url(),
        })
    }
}

#[async_trait]
impl WordLookup for HttpLookupClient {
    async fn detect(&self, word: &str) -> Result<DetectResponse, LookupError> {
        let url = format!("{}/detect", self.base_url.trim_end_matches('/'));

        let response = self.client.get(&url).query(&[("q", word)]).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Status { status, body });
        }

        response
            .json::<DetectResponse>()
            .await
            .map_err(|e| LookupError::MalformedReply(e.to_string()))
    }
}
