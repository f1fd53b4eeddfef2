//! Catalog entry types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Weight;

/// Upstream visual category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Display,
    Handwriting,
    SansSerif,
    Serif,
    Monospace,
    /// Anything the upstream adds later. Kept verbatim, never bucketed.
    Other(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Display => "display",
            Category::Handwriting => "handwriting",
            Category::SansSerif => "sans-serif",
            Category::Serif => "serif",
            Category::Monospace => "monospace",
            Category::Other(name) => name,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other(String::new())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "display" => Category::Display,
            "handwriting" => Category::Handwriting,
            "sans-serif" => Category::SansSerif,
            "serif" => Category::Serif,
            "monospace" => Category::Monospace,
            _ => Category::Other(value),
        }
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// A font family exactly as the upstream catalog returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFontEntry {
    #[serde(default)]
    pub category: Category,
    pub family: String,
    /// Weight token to file URL. A missing or null map, or a null URL, is
    /// treated as absent.
    #[serde(default)]
    pub files: Option<BTreeMap<String, Option<String>>>,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub subsets: Vec<String>,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub last_modified: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
}

/// A catalog entry restricted to the supported weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFont {
    pub category: Category,
    pub family: String,
    /// Canonical weight to file URL
    pub files: BTreeMap<Weight, String>,
    /// Keys of `files`, in canonical order
    pub available_weights: Vec<Weight>,
    pub kind: String,
    pub subsets: Vec<String>,
    pub variants: Vec<String>,
    pub last_modified: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
}

impl NormalizedFont {
    /// File URL for a weight, if the family ships it
    pub fn url(&self, weight: Weight) -> Option<&str> {
        self.files.get(&weight).map(String::as_str)
    }

    pub fn has_weight(&self, weight: Weight) -> bool {
        self.files.contains_key(&weight)
    }

    /// Whether the family name marks a condensed style
    pub fn is_condensed(&self) -> bool {
        self.family.contains("Condensed")
    }
}

impl From<RawFontEntry> for NormalizedFont {
    /// Keeps only allowed weight tokens, relabels `regular` as 400 and
    /// derives `available_weights` from what survived.
    fn from(raw: RawFontEntry) -> Self {
        let upstream = raw.files.unwrap_or_default();

        let files: BTreeMap<Weight, String> = Weight::ALL
            .into_iter()
            .filter_map(|weight| {
                upstream
                    .get(weight.token())
                    .and_then(|url| url.as_deref())
                    .filter(|url| !url.is_empty())
                    .map(|url| (weight, url.to_string()))
            })
            .collect();

        let available_weights = files.keys().copied().collect();

        Self {
            category: raw.category,
            family: raw.family,
            files,
            available_weights,
            kind: raw.kind,
            subsets: raw.subsets,
            variants: raw.variants,
            last_modified: raw.last_modified,
            menu: raw.menu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(files: serde_json::Value) -> RawFontEntry {
        serde_json::from_value(json!({
            "category": "serif",
            "family": "Lora",
            "files": files,
            "kind": "webfonts#webfont",
            "subsets": ["latin"],
            "variants": ["regular", "700"],
            "lastModified": "2024-01-01",
        }))
        .unwrap()
    }

    #[test]
    fn test_category_round_trip() {
        let c: Category = serde_json::from_value(json!("sans-serif")).unwrap();
        assert_eq!(c, Category::SansSerif);
        assert_eq!(serde_json::to_value(&c).unwrap(), json!("sans-serif"));

        let other: Category = serde_json::from_value(json!("pixel")).unwrap();
        assert_eq!(other, Category::Other("pixel".into()));
        assert_eq!(other.as_str(), "pixel");
    }

    #[test]
    fn test_restricts_and_relabels() {
        let font = NormalizedFont::from(raw(json!({
            "100": "https://f/100.ttf",
            "regular": "https://f/400.ttf",
            "italic": "https://f/italic.ttf",
            "700": "https://f/700.ttf",
        })));

        assert_eq!(font.available_weights, vec![Weight::Regular, Weight::Bold]);
        assert_eq!(font.url(Weight::Regular), Some("https://f/400.ttf"));
        assert_eq!(font.url(Weight::Light), None);
        assert_eq!(font.files.len(), font.available_weights.len());
    }

    #[test]
    fn test_missing_files_is_empty() {
        let entry: RawFontEntry = serde_json::from_value(json!({
            "category": "display",
            "family": "Nothing",
        }))
        .unwrap();
        let font = NormalizedFont::from(entry);
        assert!(font.files.is_empty());
        assert!(font.available_weights.is_empty());
    }

    #[test]
    fn test_null_url_and_missing_category() {
        let entry: RawFontEntry = serde_json::from_value(json!({
            "family": "Partial",
            "files": { "regular": null, "700": "https://f/700.ttf" },
        }))
        .unwrap();
        assert_eq!(entry.category, Category::Other(String::new()));

        let font = NormalizedFont::from(entry);
        assert_eq!(font.available_weights, vec![Weight::Bold]);
    }

    #[test]
    fn test_empty_url_skipped() {
        let font = NormalizedFont::from(raw(json!({ "300": "", "500": "https://f/500.ttf" })));
        assert_eq!(font.available_weights, vec![Weight::Medium]);
    }

    #[test]
    fn test_metadata_passes_through() {
        let font = NormalizedFont::from(raw(json!({})));
        assert_eq!(font.kind, "webfonts#webfont");
        assert_eq!(font.subsets, vec!["latin"]);
        assert_eq!(font.variants, vec!["regular", "700"]);
        assert_eq!(font.last_modified, "2024-01-01");
    }

    #[test]
    fn test_serialized_shape() {
        let font = NormalizedFont::from(raw(json!({ "regular": "https://f/400.ttf" })));
        let value = serde_json::to_value(&font).unwrap();
        assert_eq!(value["files"], json!({ "400": "https://f/400.ttf" }));
        assert_eq!(value["availableWeights"], json!(["400"]));
        assert_eq!(value["lastModified"], json!("2024-01-01"));
    }
}
