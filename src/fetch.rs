//! Page fetching over HTTP.
//!
//! The crawler only depends on the [`PageFetcher`] trait, so tests can swap
//! the network for canned pages. [`HttpFetcher`] is the `reqwest` backed
//! implementation used by the binary.
//!
//! A fetch either returns the page body or a [`FetchError`]. An empty body
//! with a success status is still a success. There is no retry: a failed page
//! is skipped by the caller.

use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Header value sent on every request unless configured otherwise.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status {status}")]
    Status { status: StatusCode },
    #[error("failed to read body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Source of page markup.
pub trait PageFetcher {
    /// Fetch `url` and return its body text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// `reqwest` client with a spoofed `User-Agent` and a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let t0 = Instant::now();
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, elapsed_ms = t0.elapsed().as_millis() as u64, "Non-success status");
            return Err(FetchError::Status { status });
        }

        let body = resp.text().await.map_err(FetchError::Body)?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );
        Ok(body)
    }
}
