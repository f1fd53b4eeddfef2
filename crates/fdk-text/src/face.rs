//! Font face descriptors

use std::fmt;
use std::sync::Arc;

/// Font weight (100-900)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl From<FontWeight> for fontdb::Weight {
    fn from(weight: FontWeight) -> Self {
        fontdb::Weight(weight.0)
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An upright font face waiting to be registered with a render target.
///
/// `family` is the identifier the face is registered under, which may be
/// quoted depending on the target.
#[derive(Clone)]
pub struct FontFaceDescriptor {
    pub family: String,
    pub weight: FontWeight,
    pub data: Arc<Vec<u8>>,
}

impl FontFaceDescriptor {
    pub fn new(family: impl Into<String>, weight: FontWeight, data: Vec<u8>) -> Self {
        Self {
            family: family.into(),
            weight,
            data: Arc::new(data),
        }
    }

    /// Payload size in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// Payloads can be hundreds of kilobytes; keep them out of debug output
impl fmt::Debug for FontFaceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFaceDescriptor")
            .field("family", &self.family)
            .field("weight", &self.weight)
            .field("bytes", &self.data.len())
            .finish()
    }
}
