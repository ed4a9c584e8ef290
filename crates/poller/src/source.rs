//! Upstream status source: the trait the coordinator polls, and its HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use vtsim_core::{JobStatus, StatusResponse};

/// Failure of a single upstream fetch.
///
/// Every variant is a transport failure from the coordinator's point of view:
/// it is retried, never surfaced individually to callers.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("upstream did not answer within {0:?}")]
    Timeout(Duration),

    #[error("received non-200 response from upstream: {0}")]
    UnexpectedStatus(u16),

    #[error("malformed upstream payload: {0}")]
    MalformedPayload(String),
}

/// Answers "what is the job status now?".
#[async_trait]
pub trait StatusSource: Send + Sync + 'static {
    async fn fetch(&self, timeout: Duration) -> Result<JobStatus, FetchError>;
}

/// `GET {base_url}/status` against an HTTP upstream.
#[derive(Debug, Clone)]
pub struct HttpStatusSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStatusSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn status_url(&self) -> String {
        format!("{}/status", self.base_url)
    }
}

#[async_trait]
impl StatusSource for HttpStatusSource {
    async fn fetch(&self, timeout: Duration) -> Result<JobStatus, FetchError> {
        let res = self
            .client
            .get(self.status_url())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify(e, timeout))?;

        if res.status() != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus(res.status().as_u16()));
        }

        let bytes = res.bytes().await.map_err(|e| classify(e, timeout))?;
        let body: StatusResponse = serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::MalformedPayload(e.to_string()))?;

        Ok(body.result)
    }
}

fn classify(err: reqwest::Error, timeout: Duration) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(timeout)
    } else {
        FetchError::Transport(err.to_string())
    }
}
