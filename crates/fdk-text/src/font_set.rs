//! Active font set backed by fontdb

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use fontdb::{Database, Source};

use crate::{FontFaceDescriptor, FontWeight, RenderTarget, Result, TextError};

/// A face registered with the font set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFace {
    /// Identifier the face was registered under
    pub family: String,
    pub weight: FontWeight,
}

struct Inner {
    db: Database,
    faces: Vec<ActiveFace>,
}

/// Fonts available for rendering in this process
pub struct FontSet {
    inner: Mutex<Inner>,
    quote_family_names: bool,
}

impl FontSet {
    /// Create an empty font set
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                db: Database::new(),
                faces: Vec::new(),
            }),
            quote_family_names: false,
        }
    }

    /// Require quoted family identifiers
    pub fn with_quoted_family_names(mut self, quote: bool) -> Self {
        self.quote_family_names = quote;
        self
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registered faces, in registration order
    pub fn faces(&self) -> Vec<ActiveFace> {
        self.lock().faces.clone()
    }

    /// How many times a family identifier was registered
    pub fn registrations(&self, family: &str) -> usize {
        self.lock().faces.iter().filter(|f| f.family == family).count()
    }

    /// Number of registered faces
    pub fn len(&self) -> usize {
        self.lock().faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find a loaded upright face by the family name inside the font file.
    /// Surrounding quotes on `family` are ignored.
    pub fn query(&self, family: &str, weight: FontWeight) -> Option<fontdb::ID> {
        let name = family.trim_matches('"');
        let families = [fontdb::Family::Name(name)];
        self.lock().db.query(&fontdb::Query {
            families: &families,
            weight: weight.into(),
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        })
    }

    /// Run `f` against the underlying database (for shaping and rasterizing)
    pub fn with_database<R>(&self, f: impl FnOnce(&Database) -> R) -> R {
        f(&self.lock().db)
    }
}

impl Default for FontSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that a payload parses as a font
fn validate(face: &FontFaceDescriptor) -> Result<()> {
    if face.is_empty() {
        return Err(TextError::EmptyPayload(format!("{} {}", face.family, face.weight)));
    }
    ttf_parser::Face::parse(&face.data, 0)
        .map(|_| ())
        .map_err(|e| TextError::FontParsing(format!("{} {}: {}", face.family, face.weight, e)))
}

impl RenderTarget for FontSet {
    fn quotes_family_names(&self) -> bool {
        self.quote_family_names
    }

    async fn finalize(&self, face: FontFaceDescriptor) -> Result<FontFaceDescriptor> {
        smol::unblock(move || validate(&face).map(|()| face)).await
    }

    fn add(&self, face: FontFaceDescriptor) {
        let data: Arc<dyn AsRef<[u8]> + Send + Sync> = face.data.clone();
        let mut inner = self.lock();
        inner.db.load_font_source(Source::Binary(data));
        inner.faces.push(ActiveFace {
            family: face.family.clone(),
            weight: face.weight,
        });
        tracing::debug!(family = %face.family, weight = %face.weight, "added font face");
    }
}
