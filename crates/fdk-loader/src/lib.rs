//! fontdeck Loader
//!
//! Loads selected catalog fonts into a render target. Payloads come from the
//! persistent cache when present and from the network otherwise; families
//! already injected in the session are not loaded again.

mod explorer;
mod session;

pub use explorer::ExplorerFont;
pub use session::{cache_key, family_identifier, LoadStats, Session};

use fdk_net::{CacheError, NetError};
use fdk_text::TextError;

/// Batch load error. Any of these aborts the whole batch.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Font cache failure for {key}: {source}")]
    Cache { key: String, source: CacheError },

    #[error("Failed to fetch {url}: {source}")]
    Fetch { url: String, source: NetError },

    #[error("Font face {family} {weight} rejected: {source}")]
    Finalize {
        family: String,
        weight: u16,
        source: TextError,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;
