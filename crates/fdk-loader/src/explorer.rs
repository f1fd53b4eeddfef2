//! Fonts selected for loading

use std::ops::Deref;

use fdk_catalog::{NormalizedFont, Weight};
use serde::Serialize;

/// A catalog font plus the weights a load batch prepared for it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerFont {
    #[serde(flatten)]
    pub font: NormalizedFont,
    /// Appended in canonical order as the loader scans each weight
    pub loaded_weights: Vec<Weight>,
}

impl ExplorerFont {
    pub fn new(font: NormalizedFont) -> Self {
        Self {
            font,
            loaded_weights: Vec::new(),
        }
    }
}

impl From<NormalizedFont> for ExplorerFont {
    fn from(font: NormalizedFont) -> Self {
        Self::new(font)
    }
}

impl Deref for ExplorerFont {
    type Target = NormalizedFont;

    fn deref(&self) -> &NormalizedFont {
        &self.font
    }
}
