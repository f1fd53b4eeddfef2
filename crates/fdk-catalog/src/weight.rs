//! Supported font weights

use std::fmt;

use serde::{Deserialize, Serialize};

/// A weight from the app's allowed set.
///
/// Variants are declared in canonical order, so `Ord` and [`Weight::ALL`]
/// agree on iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weight {
    #[serde(rename = "300")]
    Light,
    #[serde(rename = "400")]
    Regular,
    #[serde(rename = "500")]
    Medium,
    #[serde(rename = "700")]
    Bold,
}

impl Weight {
    /// Allowed weights in canonical order
    pub const ALL: [Weight; 4] = [Weight::Light, Weight::Regular, Weight::Medium, Weight::Bold];

    /// Token used by the upstream catalog for this weight
    pub fn token(self) -> &'static str {
        match self {
            Weight::Light => "300",
            Weight::Regular => "regular",
            Weight::Medium => "500",
            Weight::Bold => "700",
        }
    }

    /// Canonical numeric label
    pub fn label(self) -> &'static str {
        match self {
            Weight::Light => "300",
            Weight::Regular => "400",
            Weight::Medium => "500",
            Weight::Bold => "700",
        }
    }

    /// Numeric weight (CSS scale)
    pub fn value(self) -> u16 {
        match self {
            Weight::Light => 300,
            Weight::Regular => 400,
            Weight::Medium => 500,
            Weight::Bold => 700,
        }
    }

    /// Resolve an upstream weight token. Only tokens in the allowed set
    /// resolve; `"regular"` is the alias for 400.
    pub fn from_token(token: &str) -> Option<Weight> {
        Weight::ALL.into_iter().find(|w| w.token() == token)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_alias() {
        assert_eq!(Weight::from_token("regular"), Some(Weight::Regular));
        assert_eq!(Weight::Regular.label(), "400");
        // The canonical label is not an upstream token
        assert_eq!(Weight::from_token("400"), None);
    }

    #[test]
    fn test_unsupported_tokens() {
        for token in ["100", "600", "italic", "700italic", ""] {
            assert_eq!(Weight::from_token(token), None, "{token}");
        }
    }

    #[test]
    fn test_canonical_order() {
        let mut sorted = Weight::ALL;
        sorted.sort();
        assert_eq!(sorted, Weight::ALL);
        let values: Vec<u16> = Weight::ALL.iter().map(|w| w.value()).collect();
        assert_eq!(values, [300, 400, 500, 700]);
    }

    #[test]
    fn test_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Weight::Regular).unwrap(), "\"400\"");
        assert_eq!(Weight::Bold.to_string(), "700");
    }
}
