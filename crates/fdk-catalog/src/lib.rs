//! fontdeck Catalog
//!
//! Turns the upstream font catalog into something the app can use:
//! - Bitmap and locale-duplicate families filtered out
//! - Files restricted to the weights the app supports
//! - Fonts grouped by visual category
//! - Family lookup over the grouped catalog

pub mod api;
mod catalog;
mod model;
mod normalize;
mod weight;

pub use catalog::{find_family, CategorizedCatalog, CategoryKey};
pub use model::{Category, NormalizedFont, RawFontEntry};
pub use normalize::{normalize_catalog, CatalogFilter};
pub use weight::Weight;

/// Catalog error types
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("[get-family] - {0} not found.")]
    NotFound(String),

    #[error("Catalog API error {code}: {message}")]
    Upstream { code: u16, message: String },

    #[error("Failed to parse catalog response: {0}")]
    Parse(String),

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
