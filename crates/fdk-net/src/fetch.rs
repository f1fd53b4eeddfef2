//! Font file fetching
//!
//! Resolves a file URL to its bytes. The HTTP implementation uses the
//! blocking reqwest client on smol's blocking pool so callers stay on a
//! cooperative executor.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::NetError;

/// Source of remote font payloads
pub trait FontFetcher: Send + Sync {
    /// Fetch the full body at `url`. Any transport or HTTP failure is a
    /// single [`NetError`].
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, NetError>> + Send;
}

impl<T: FontFetcher> FontFetcher for Arc<T> {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, NetError>> + Send {
        (**self).fetch(url)
    }
}

/// HTTP client settings
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("fontdeck/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Fetch font files over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, NetError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|e| NetError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl FontFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, NetError> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| NetError::InvalidUrl(format!("{}: {e}", strip_query(url))))?;
        let client = self.client.clone();

        tracing::info!(
            "HTTP GET {}://{}{}",
            url.scheme(),
            url.host_str().unwrap_or_default(),
            url.path()
        );

        smol::unblock(move || {
            let response = client
                .get(url)
                .send()
                .map_err(|e| NetError::Network(e.without_url().to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(NetError::HttpError { status: status.as_u16() });
            }

            response
                .bytes()
                .map(|body| body.to_vec())
                .map_err(|e| NetError::Network(e.without_url().to_string()))
        })
        .await
    }
}

/// Query strings may carry credentials and never reach logs or errors
fn strip_query(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}
