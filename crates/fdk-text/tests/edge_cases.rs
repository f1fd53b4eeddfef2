//! Edge case tests for fdk-text
//!
//! Font set bookkeeping and the render target seam.

use std::sync::Arc;

use fdk_text::*;

/// Minimal TrueType font whose name table says "Fixture Sans"
const FIXTURE_SANS: &[u8] = include_bytes!("fixtures/fixture-sans.ttf");

fn face(family: &str, weight: FontWeight) -> FontFaceDescriptor {
    FontFaceDescriptor::new(family, weight, vec![0u8; 32])
}

// ============================================================================
// FONT SET TESTS
// ============================================================================

#[test]
fn test_registration_order() {
    let set = FontSet::new();
    set.add(face("Roboto", FontWeight::LIGHT));
    set.add(face("Roboto", FontWeight::BOLD));
    set.add(face("Lora", FontWeight::NORMAL));

    let weights: Vec<u16> = set.faces().iter().map(|f| f.weight.0).collect();
    assert_eq!(weights, vec![300, 700, 400]);
    assert_eq!(set.len(), 3);
}

#[test]
fn test_registrations_per_family() {
    let set = FontSet::new();
    set.add(face("\"Open Sans\"", FontWeight::NORMAL));
    set.add(face("\"Open Sans\"", FontWeight::MEDIUM));

    assert_eq!(set.registrations("\"Open Sans\""), 2);
    assert_eq!(set.registrations("Open Sans"), 0);
}

#[test]
fn test_finalize_rejects_truncated_font() {
    let set = FontSet::new();
    // TrueType magic followed by nothing
    let truncated = FontFaceDescriptor::new("Inter", FontWeight::NORMAL, vec![0x00, 0x01, 0x00, 0x00]);
    let result = smol::block_on(set.finalize(truncated));
    assert!(matches!(result, Err(TextError::FontParsing(_))));
}

#[test]
fn test_valid_font_loads_and_queries() {
    let set = FontSet::new();
    let descriptor = FontFaceDescriptor::new("Fixture Sans", FontWeight::NORMAL, FIXTURE_SANS.to_vec());

    let finalized = smol::block_on(set.finalize(descriptor)).unwrap();
    assert_eq!(finalized.len(), FIXTURE_SANS.len());
    set.add(finalized);

    assert_eq!(set.len(), 1);
    assert_eq!(set.with_database(|db| db.len()), 1);

    let id = set.query("Fixture Sans", FontWeight::NORMAL).unwrap();
    let family = set.with_database(|db| db.face(id).map(|info| info.families[0].0.clone()));
    assert_eq!(family.as_deref(), Some("Fixture Sans"));

    assert_eq!(set.query("\"Fixture Sans\"", FontWeight::NORMAL), Some(id));
    assert_eq!(set.query("Lora", FontWeight::NORMAL), None);
}

#[test]
fn test_truncated_fixture_rejected() {
    let set = FontSet::new();
    let truncated = FontFaceDescriptor::new("Fixture Sans", FontWeight::NORMAL, FIXTURE_SANS[..40].to_vec());
    let result = smol::block_on(set.finalize(truncated));
    assert!(matches!(result, Err(TextError::FontParsing(_))));
}

// ============================================================================
// RENDER TARGET TESTS
// ============================================================================

#[test]
fn test_shared_target() {
    let set = Arc::new(FontSet::new().with_quoted_family_names(true));
    set.add(face("\"Lora\"", FontWeight::BOLD));

    let shared = Arc::clone(&set);
    assert!(RenderTarget::quotes_family_names(&shared));
    RenderTarget::add(&shared, face("\"Lora\"", FontWeight::LIGHT));
    assert_eq!(set.registrations("\"Lora\""), 2);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        TextError::EmptyPayload("Roboto 400".into()).to_string(),
        "Empty font payload for Roboto 400"
    );
}
