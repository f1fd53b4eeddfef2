//! fontdeck Text
//!
//! The rendering side of font loading:
//! - Font face descriptors built from raw payloads
//! - The `RenderTarget` seam the loader injects faces through
//! - A fontdb-backed active font set

mod face;
mod font_set;
mod target;

pub use face::{FontFaceDescriptor, FontWeight};
pub use font_set::{ActiveFace, FontSet};
pub use target::RenderTarget;

/// Text error types
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Failed to parse font: {0}")]
    FontParsing(String),

    #[error("Empty font payload for {0}")]
    EmptyPayload(String),
}

pub type Result<T> = std::result::Result<T, TextError>;
