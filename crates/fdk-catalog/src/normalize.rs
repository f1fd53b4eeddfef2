//! Catalog normalization
//!
//! Stage order is fixed: bitmap filtering, duplicate suppression, weight
//! restriction, categorization. Blocked families must be gone before
//! duplicate suppression looks at base names.

use crate::{CategorizedCatalog, NormalizedFont, RawFontEntry};

const BLOCKED_FAMILIES: &[&str] = &[
    "Press Start 2P",
    "Rubik 80s Fade",
    "Brygada 1918",
    "Goudy Bookletter 1911",
];

const BLOCKED_PREFIXES: &[&str] = &["Baloo", "Libre Barcode", "Slabo", "M PLUS"];

const BASE_FAMILIES: &[&str] = &[
    "Noto",
    "Noto Sans",
    "Noto Serif",
    "IBM Plex Sans",
    "Hind",
    "Anek",
    "Tiro",
    "Kaisei",
    "Mukta",
];

/// Family filtering rules applied before categorization
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    /// Families dropped on exact match (bitmap fonts the renderer rejects)
    pub blocked_families: Vec<String>,
    /// Families dropped when their name starts with one of these
    pub blocked_prefixes: Vec<String>,
    /// Base names whose locale variants are dropped. The base itself stays.
    pub base_families: Vec<String>,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            blocked_families: to_owned(BLOCKED_FAMILIES),
            blocked_prefixes: to_owned(BLOCKED_PREFIXES),
            base_families: to_owned(BASE_FAMILIES),
        }
    }
}

fn to_owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl CatalogFilter {
    /// Whether the family is a bitmap font the renderer cannot use
    pub fn is_blocked(&self, family: &str) -> bool {
        self.blocked_families.iter().any(|f| f == family)
            || self.blocked_prefixes.iter().any(|p| family.starts_with(p.as_str()))
    }

    /// Whether the family is a locale variant of a base family,
    /// e.g. "Noto Sans Thai" for "Noto Sans". A family that is itself a base
    /// name is never a duplicate, even when it extends a shorter base
    /// ("Noto Sans" over "Noto").
    pub fn is_locale_duplicate(&self, family: &str) -> bool {
        if self.base_families.iter().any(|base| base == family) {
            return false;
        }
        self.base_families
            .iter()
            .any(|base| family.starts_with(base.as_str()))
    }

    /// Run the full pipeline over an upstream catalog
    pub fn normalize(&self, entries: Vec<RawFontEntry>) -> CategorizedCatalog {
        let total = entries.len();

        let scalable: Vec<RawFontEntry> = entries
            .into_iter()
            .filter(|e| !self.is_blocked(&e.family))
            .collect();
        let after_bitmap = scalable.len();

        let deduped: Vec<RawFontEntry> = scalable
            .into_iter()
            .filter(|e| !self.is_locale_duplicate(&e.family))
            .collect();
        let after_dedup = deduped.len();

        let fonts: Vec<NormalizedFont> = deduped.into_iter().map(NormalizedFont::from).collect();

        let catalog = CategorizedCatalog::from_fonts(fonts);

        tracing::debug!(
            total,
            bitmap_dropped = total - after_bitmap,
            duplicates_dropped = after_bitmap - after_dedup,
            uncategorized = after_dedup - catalog.len(),
            "normalized font catalog"
        );

        catalog
    }
}

/// Normalize an upstream catalog with the default filter
pub fn normalize_catalog(entries: Vec<RawFontEntry>) -> CategorizedCatalog {
    CatalogFilter::default().normalize(entries)
}
