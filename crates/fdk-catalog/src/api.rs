//! Upstream catalog API
//!
//! Request URL construction and response parsing for the web fonts
//! developer API. Transport lives elsewhere.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{CatalogError, RawFontEntry, Result};

/// Default catalog endpoint
pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/webfonts/v1/webfonts";

/// Sort order requested from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriteria {
    Alpha,
    Date,
    #[default]
    Popularity,
    Trending,
}

impl SortCriteria {
    pub fn as_str(self) -> &'static str {
        match self {
            SortCriteria::Alpha => "alpha",
            SortCriteria::Date => "date",
            SortCriteria::Popularity => "popularity",
            SortCriteria::Trending => "trending",
        }
    }
}

impl FromStr for SortCriteria {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alpha" => Ok(SortCriteria::Alpha),
            "date" => Ok(SortCriteria::Date),
            "popularity" => Ok(SortCriteria::Popularity),
            "trending" => Ok(SortCriteria::Trending),
            other => Err(CatalogError::Parse(format!("unknown sort criteria '{other}'"))),
        }
    }
}

/// Successful catalog response. Items stay undecoded until
/// [`parse_response`] so one malformed entry cannot sink the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub kind: String,
    pub items: Vec<serde_json::Value>,
}

/// Error envelope returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub errors: Vec<ApiErrorReason>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorReason {
    pub message: String,
    #[serde(default)]
    pub reason: String,
}

/// Build the catalog request URL
pub fn catalog_url(base: &str, api_key: &str, sort: SortCriteria) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| CatalogError::InvalidUrl(format!("{base}: {e}")))?;
    url.query_pairs_mut()
        .append_pair("key", api_key)
        .append_pair("sort", sort.as_str());
    Ok(url)
}

/// Parse a catalog response body into raw entries.
///
/// An API error envelope becomes [`CatalogError::Upstream`]. Items that do
/// not decode are logged and skipped.
pub fn parse_response(body: &[u8]) -> Result<Vec<RawFontEntry>> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| CatalogError::Parse(e.to_string()))?;

    if value.get("error").is_some() {
        let envelope: ApiErrorResponse =
            serde_json::from_value(value).map_err(|e| CatalogError::Parse(e.to_string()))?;
        return Err(CatalogError::Upstream {
            code: envelope.error.code,
            message: envelope.error.message,
        });
    }

    let response: CatalogResponse =
        serde_json::from_value(value).map_err(|e| CatalogError::Parse(e.to_string()))?;
    let total = response.items.len();

    let entries: Vec<RawFontEntry> = response
        .items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed catalog item");
                None
            }
        })
        .collect();

    tracing::debug!(
        kind = %response.kind,
        items = total,
        skipped = total - entries.len(),
        "parsed catalog response"
    );
    Ok(entries)
}
