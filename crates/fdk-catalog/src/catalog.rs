//! Categorized catalog and family lookup

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::{CatalogError, Category, NormalizedFont, Result};

/// Category keys exposed to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Sans,
    Display,
    Serif,
    Handwriting,
    /// Derived from `Sans`, never stored separately
    Condensed,
}

impl CategoryKey {
    /// Lookup order used by [`find_family`]
    pub const ALL: [CategoryKey; 5] = [
        CategoryKey::Sans,
        CategoryKey::Display,
        CategoryKey::Serif,
        CategoryKey::Handwriting,
        CategoryKey::Condensed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKey::Sans => "sans",
            CategoryKey::Display => "display",
            CategoryKey::Serif => "serif",
            CategoryKey::Handwriting => "handwriting",
            CategoryKey::Condensed => "condensed",
        }
    }
}

/// Normalized fonts grouped by category.
///
/// Every font lives in exactly one of the four stored buckets. The condensed
/// view is computed from `sans` on each call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorizedCatalog {
    sans: Vec<NormalizedFont>,
    display: Vec<NormalizedFont>,
    serif: Vec<NormalizedFont>,
    handwriting: Vec<NormalizedFont>,
}

impl CategorizedCatalog {
    /// Partition fonts by category, keeping input order. Monospace and
    /// unknown categories are dropped.
    pub fn from_fonts(fonts: Vec<NormalizedFont>) -> Self {
        let mut catalog = Self::default();
        for font in fonts {
            match font.category {
                Category::SansSerif => catalog.sans.push(font),
                Category::Display => catalog.display.push(font),
                Category::Serif => catalog.serif.push(font),
                Category::Handwriting => catalog.handwriting.push(font),
                Category::Monospace | Category::Other(_) => {}
            }
        }
        catalog
    }

    pub fn sans(&self) -> &[NormalizedFont] {
        &self.sans
    }

    pub fn display(&self) -> &[NormalizedFont] {
        &self.display
    }

    pub fn serif(&self) -> &[NormalizedFont] {
        &self.serif
    }

    pub fn handwriting(&self) -> &[NormalizedFont] {
        &self.handwriting
    }

    /// Sans fonts whose family name marks a condensed style
    pub fn condensed(&self) -> impl Iterator<Item = &NormalizedFont> {
        self.sans.iter().filter(|f| f.is_condensed())
    }

    /// Fonts under a category key
    pub fn fonts(&self, key: CategoryKey) -> Vec<&NormalizedFont> {
        match key {
            CategoryKey::Sans => self.sans.iter().collect(),
            CategoryKey::Display => self.display.iter().collect(),
            CategoryKey::Serif => self.serif.iter().collect(),
            CategoryKey::Handwriting => self.handwriting.iter().collect(),
            CategoryKey::Condensed => self.condensed().collect(),
        }
    }

    /// All fonts, flattened in lookup order. Condensed fonts appear twice.
    pub fn iter(&self) -> impl Iterator<Item = &NormalizedFont> {
        self.sans
            .iter()
            .chain(&self.display)
            .chain(&self.serif)
            .chain(&self.handwriting)
            .chain(self.condensed())
    }

    /// Number of distinct fonts (condensed view not counted)
    pub fn len(&self) -> usize {
        self.sans.len() + self.display.len() + self.serif.len() + self.handwriting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for CategorizedCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let condensed: Vec<&NormalizedFont> = self.condensed().collect();
        let mut state = serializer.serialize_struct("CategorizedCatalog", 5)?;
        state.serialize_field("sans", &self.sans)?;
        state.serialize_field("display", &self.display)?;
        state.serialize_field("serif", &self.serif)?;
        state.serialize_field("handwriting", &self.handwriting)?;
        state.serialize_field("condensed", &condensed)?;
        state.end()
    }
}

/// Find a family by exact, case-sensitive name.
///
/// Callers only ask for names taken from the catalog, so a miss is an error
/// rather than an empty result.
pub fn find_family<'a>(catalog: &'a CategorizedCatalog, family: &str) -> Result<&'a NormalizedFont> {
    catalog
        .iter()
        .find(|font| font.family == family)
        .ok_or_else(|| CatalogError::NotFound(family.to_string()))
}
