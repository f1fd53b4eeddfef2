//! Command line configuration

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use fdk_catalog::api::{SortCriteria, DEFAULT_API_URL};
use fdk_net::FetcherConfig;

/// fontdeck configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog API key
    pub api_key: String,

    /// Catalog endpoint
    pub api_url: String,

    /// Catalog sort order
    pub sort: SortCriteria,

    /// Directory for cached font payloads
    pub cache_dir: PathBuf,

    /// Register families under quoted names
    pub quote_family_names: bool,

    /// HTTP client settings
    pub fetcher: FetcherConfig,
}

impl Config {
    /// Read configuration from `FONTDECK_*` environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let Some(api_key) = lookup("FONTDECK_API_KEY").filter(|k| !k.is_empty()) else {
            bail!("FONTDECK_API_KEY is not set");
        };

        let sort = match lookup("FONTDECK_SORT") {
            Some(value) => value.parse::<SortCriteria>().context("FONTDECK_SORT")?,
            None => SortCriteria::default(),
        };

        let quote_family_names = match lookup("FONTDECK_QUOTE_FAMILIES").as_deref() {
            None | Some("" | "0" | "false") => false,
            Some("1" | "true") => true,
            Some(other) => bail!("FONTDECK_QUOTE_FAMILIES: expected true or false, got '{other}'"),
        };

        let mut fetcher = FetcherConfig::default();
        if let Some(secs) = lookup("FONTDECK_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().context("FONTDECK_TIMEOUT_SECS")?;
            fetcher.timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            api_key,
            api_url: lookup("FONTDECK_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            sort,
            cache_dir: lookup("FONTDECK_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".fontdeck-cache")),
            quote_family_names,
            fetcher,
        })
    }
}
