//! Render target seam

use std::future::Future;
use std::sync::Arc;

use crate::{FontFaceDescriptor, Result};

/// Rendering environment that accepts loaded font faces.
///
/// `add` must tolerate the same family/weight arriving twice from racing
/// loads.
pub trait RenderTarget: Send + Sync {
    /// Whether family names must be wrapped in double quotes to be matched
    fn quotes_family_names(&self) -> bool {
        false
    }

    /// Parse and validate a face. Fails when the payload is not a usable
    /// font.
    fn finalize(&self, face: FontFaceDescriptor) -> impl Future<Output = Result<FontFaceDescriptor>> + Send;

    /// Make a finalized face part of the active font set
    fn add(&self, face: FontFaceDescriptor);
}

impl<T: RenderTarget> RenderTarget for Arc<T> {
    fn quotes_family_names(&self) -> bool {
        (**self).quotes_family_names()
    }

    fn finalize(&self, face: FontFaceDescriptor) -> impl Future<Output = Result<FontFaceDescriptor>> + Send {
        (**self).finalize(face)
    }

    fn add(&self, face: FontFaceDescriptor) {
        (**self).add(face)
    }
}
