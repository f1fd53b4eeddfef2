//! fontdeck Networking
//!
//! Font file fetching and the persistent payload cache.

mod cache;
mod fetch;

pub use cache::{cache_file_name, CacheError, DiskCache, FontCache, MemoryCache};
pub use fetch::{FetcherConfig, FontFetcher, HttpFetcher};

/// Network error
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
