//! Page fetching.
//!
//! Fetching sits outside the extraction core: the dispatcher only ever sees
//! HTML text. [`FetchPage`] is the seam, [`HttpFetcher`] the real client.

use crate::error::FetchError;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};

/// Browser-like agent string; some of the sites reject bare clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/120";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);

/// Anything that can turn a URL into an HTML body.
pub trait FetchPage {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP fetcher with a fixed user agent and request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl FetchPage for HttpFetcher {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let t0 = Instant::now();
        let response = self.client.get(url).send().await.inspect_err(|e| {
            warn!(error = %e, "Request failed");
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Non-200 response");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        info!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );
        Ok(body)
    }
}
