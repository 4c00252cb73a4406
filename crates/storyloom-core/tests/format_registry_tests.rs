//! Format registry tests — 10 scenarios.
//!
//! Covers detection order, forced dispatch, and the unsupported-input
//! error surface.

mod common;

use common::{base_interchange, base_markup, to_text};
use serde_json::json;
use storyloom_core::errors::{StoryError, StoryErrorKind, EXCERPT_MAX_CHARS};
use storyloom_core::formats::{FormatRegistry, JsonFormat, TwineFormat};

/// Content whose sniff matches both registered formats: a valid interchange
/// object whose body text happens to contain the markup markers.
fn ambiguous_content() -> String {
    to_text(&json!({
        "passages": [
            {"id": "a", "title": "A", "content": ":: not a header [[not a link]]"}
        ]
    }))
}

// S1: Interchange text routes to the json parser
#[test]
fn test_routes_interchange_to_json() {
    let registry = FormatRegistry::new();
    let story = registry.parse(&to_text(&base_interchange())).unwrap();
    assert_eq!(story.title, "The Cave");
    assert_eq!(story.passages.len(), 2);
}

// S2: Markup text routes to the twine parser
#[test]
fn test_routes_markup_to_twine() {
    let registry = FormatRegistry::new();
    let story = registry.parse(base_markup()).unwrap();
    assert_eq!(story.passages.len(), 2);
    assert_eq!(story.passages[0].id, "start");
}

// S3: When both sniffs match, declared order wins (json first)
#[test]
fn test_ambiguous_content_takes_declared_order() {
    let registry = FormatRegistry::new();
    let detected = registry.detect(&ambiguous_content()).unwrap();
    assert_eq!(detected.format(), "json");

    // Parsed as interchange: the markers stay literal body text
    let story = registry.parse(&ambiguous_content()).unwrap();
    assert_eq!(story.passages[0].content, ":: not a header [[not a link]]");
}

// S4: Reversed registration order flips the winner
#[test]
fn test_registration_order_is_authoritative() {
    let registry =
        FormatRegistry::with_formats(vec![Box::new(TwineFormat), Box::new(JsonFormat)]);
    let detected = registry.detect(&ambiguous_content()).unwrap();
    assert_eq!(detected.format(), "twine");
}

// S5: Unrecognized content fails with a bounded leading excerpt
#[test]
fn test_unsupported_format_excerpt_bounded() {
    let registry = FormatRegistry::new();
    let long_input = "z".repeat(500);
    let err = registry.parse(&long_input).unwrap_err();
    assert_eq!(err.kind(), StoryErrorKind::UnsupportedFormat);
    assert_eq!(err.code(), "ERR_UNSUPPORTED_FORMAT");
    match err {
        StoryError::UnsupportedFormat { excerpt } => {
            assert_eq!(excerpt.chars().count(), EXCERPT_MAX_CHARS);
            assert!(excerpt.chars().all(|c| c == 'z'));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// S6: Short unrecognized content keeps its full text as the excerpt
#[test]
fn test_unsupported_format_short_excerpt() {
    let registry = FormatRegistry::new();
    let err = registry.parse("plain prose").unwrap_err();
    match err {
        StoryError::UnsupportedFormat { excerpt } => assert_eq!(excerpt, "plain prose"),
        other => panic!("unexpected error: {other:?}"),
    }
}

// S7: Empty input is unsupported, not an empty story
#[test]
fn test_empty_input_unsupported() {
    let registry = FormatRegistry::new();
    let err = registry.parse("").unwrap_err();
    assert_eq!(err.kind(), StoryErrorKind::UnsupportedFormat);
}

// S8: formats() lists tags in registration order
#[test]
fn test_formats_lists_registration_order() {
    let registry = FormatRegistry::new();
    assert_eq!(registry.formats(), vec!["json", "twine"]);
}

// S9: by_tag bypasses detection for a forced parse
#[test]
fn test_by_tag_forces_parser() {
    let registry = FormatRegistry::new();
    assert!(registry.by_tag("json").is_some());
    assert!(registry.by_tag("yaml").is_none());

    // Force the twine parser onto content whose sniff would pick json
    let twine = registry.by_tag("twine").unwrap();
    let story = twine.parse(&ambiguous_content()).unwrap();
    assert!(story.passages.is_empty(), "no `::` header at line start");
}

// S10: register() appends to an initially empty registry
#[test]
fn test_register_appends() {
    let mut registry = FormatRegistry::with_formats(Vec::new());
    assert!(registry.detect(base_markup()).is_none());
    registry.register(Box::new(TwineFormat));
    assert_eq!(registry.detect(base_markup()).unwrap().format(), "twine");
}
