//! Markup parser tests — 20 scenarios.
//!
//! All tests drive `TwineFormat` through the public `StoryFormat` surface
//! on in-memory text (no I/O).

mod common;

use common::base_markup;
use storyloom_core::formats::{StoryFormat, TwineFormat};
use storyloom_core::model::{Position, DEFAULT_TITLE};

fn parse(content: &str) -> storyloom_core::model::ParsedStory {
    TwineFormat.parse(content).unwrap()
}

// ---------------------------------------------------------------------------
// Document shape
// ---------------------------------------------------------------------------

// S1: Two-passage document parses with passages in source order
#[test]
fn test_parses_passages_in_source_order() {
    let story = parse(base_markup());
    assert_eq!(story.passages.len(), 2);
    assert_eq!(story.passages[0].title, "Start");
    assert_eq!(story.passages[1].title, "North");
}

// S2: Markup carries no story-level fields → placeholder title, empty bags
#[test]
fn test_markup_story_fields_default() {
    let story = parse(base_markup());
    assert_eq!(story.title, DEFAULT_TITLE);
    assert!(story.author.is_none());
    assert!(story.metadata.is_none());
    assert!(story.variables.is_none());
}

// S3: Text before the first header belongs to no passage
#[test]
fn test_preamble_before_first_header_ignored() {
    let story = parse("stray preamble line\nmore preamble\n::Start\nBody. [[End]]\n");
    assert_eq!(story.passages.len(), 1);
    assert_eq!(story.passages[0].content, "Body. End");
}

// S4: Input with no headers parses to an empty document, not an error
#[test]
fn test_no_headers_yields_empty_document() {
    let story = parse("just some prose with [[markers]] but no headers\n");
    assert_eq!(story.title, DEFAULT_TITLE);
    assert!(story.passages.is_empty());
}

// S5: Final passage closes at end of input without a trailing newline
#[test]
fn test_final_passage_without_trailing_newline() {
    let story = parse("::Start\nGo. [[End]]\n\n::End\nDone");
    assert_eq!(story.passages.len(), 2);
    assert_eq!(story.passages[1].content, "Done");
}

// S6: CRLF line endings parse the same as LF
#[test]
fn test_crlf_input() {
    let story = parse("::Start\r\nGo north. [[North]]\r\n\r\n::North\r\nHere.\r\n");
    assert_eq!(story.passages.len(), 2);
    assert_eq!(story.passages[0].content, "Go north. North");
    assert_eq!(story.passages[0].links, vec!["North"]);
}

// S7: A header line makes a passage even when the body is empty
#[test]
fn test_empty_body_passage() {
    let story = parse("::Lonely\n::Next\nText. [[Lonely]]\n");
    assert_eq!(story.passages.len(), 2);
    assert_eq!(story.passages[0].content, "");
    assert!(story.passages[0].links.is_empty());
}

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

// S8: Header title is trimmed of surrounding whitespace
#[test]
fn test_header_title_trimmed() {
    let story = parse("::  Spaced Out  \nBody. [[x]]\n");
    assert_eq!(story.passages[0].title, "Spaced Out");
}

// S9: Bracketed tag list splits on whitespace
#[test]
fn test_header_tags() {
    let story = parse("::Cave [dark scary]\nIt is dark. [[Leave]]\n");
    let p = &story.passages[0];
    assert_eq!(p.title, "Cave");
    assert_eq!(p.tags, vec!["dark", "scary"]);
    assert!(p.has_tag("scary"));
}

// S10: Braced position parses signed integer components
#[test]
fn test_header_position() {
    let story = parse("::Cave {100,-250}\nDark. [[Leave]]\n");
    assert_eq!(
        story.passages[0].position,
        Some(Position { x: 100, y: -250 })
    );
}

// S11: Tag and position segments combine in either order
#[test]
fn test_header_segments_either_order() {
    let a = parse("::Cave [dark] {10,20}\nx [[y]]\n");
    let b = parse("::Cave {10,20} [dark]\nx [[y]]\n");
    for story in [a, b] {
        let p = &story.passages[0];
        assert_eq!(p.title, "Cave");
        assert_eq!(p.tags, vec!["dark"]);
        assert_eq!(p.position, Some(Position { x: 10, y: 20 }));
    }
}

// S12: Malformed position degrades to absent without failing the passage
#[test]
fn test_malformed_position_degrades() {
    for header in ["::Cave {oops}", "::Cave {1,2,3}", "::Cave {1,2"] {
        let story = parse(&format!("{header}\nDark. [[Leave]]\n"));
        let p = &story.passages[0];
        assert_eq!(p.title, "Cave", "title survives for {header:?}");
        assert!(p.position.is_none(), "position absent for {header:?}");
        assert_eq!(p.links, vec!["Leave"]);
    }
}

// S13: Unterminated tag bracket degrades to no tags, title intact
#[test]
fn test_unterminated_tag_list_degrades() {
    let story = parse("::Cave [dark\nBody. [[Leave]]\n");
    let p = &story.passages[0];
    assert_eq!(p.title, "Cave");
    assert!(p.tags.is_empty());
}

// ---------------------------------------------------------------------------
// Links and bodies
// ---------------------------------------------------------------------------

// S14: Links collected in body order with duplicates preserved
#[test]
fn test_links_in_order_with_duplicates() {
    let story = parse("::Junction\nGo [[North]] or [[South]], or back [[North]].\n");
    assert_eq!(story.passages[0].links, vec!["North", "South", "North"]);
}

// S15: Aliased link stores the target; content keeps the display label
#[test]
fn test_aliased_link() {
    let story = parse("::Room\nYou may [[Look|Examine Room]] around.\n");
    let p = &story.passages[0];
    assert_eq!(p.links, vec!["Examine Room"]);
    assert_eq!(p.content, "You may Look around.");
}

// S16: Wrapper syntax never survives into stored content
#[test]
fn test_wrapper_syntax_stripped() {
    let story = parse("::Room\nHead [[North]] now.\n");
    let content = &story.passages[0].content;
    assert_eq!(content, "Head North now.");
    assert!(!content.contains("[["));
    assert!(!content.contains("]]"));
}

// S17: Empty link [[]] contributes no target but is stripped from content
#[test]
fn test_empty_link_stripped_not_extracted() {
    let story = parse("::Room\nodd [[]] text\n");
    let p = &story.passages[0];
    assert!(p.links.is_empty());
    assert_eq!(p.content, "odd  text");
}

// S18: Unterminated [[ is literal body text
#[test]
fn test_unterminated_link_is_literal() {
    let story = parse("::Room [t]\nbroken [[link never closes\n");
    let p = &story.passages[0];
    assert!(p.links.is_empty());
    assert_eq!(p.content, "broken [[link never closes");
}

// S19: Body is trimmed of surrounding blank lines, interior ones kept
#[test]
fn test_body_trimmed() {
    let story = parse("::Room\n\nfirst line\n\nsecond line\n\n\n::Next\nx [[Room]]\n");
    assert_eq!(story.passages[0].content, "first line\n\nsecond line");
}

// ---------------------------------------------------------------------------
// Ids and detection
// ---------------------------------------------------------------------------

// S20: Ids are deterministic slugs; colliding titles are kept, not deduped
#[test]
fn test_slug_ids_and_collisions() {
    let story = parse("::My Passage!\na [[b]]\n\n::My  Passage\nc\n\n::Chapter 2: The Cave\nd\n");
    assert_eq!(story.passages[0].id, "my-passage");
    assert_eq!(story.passages[1].id, "my-passage");
    assert_eq!(story.passages[2].id, "chapter-2-the-cave");
    assert!(!story.has_unique_ids());
    assert!(story.check_unique_ids().is_err());
    // First-occurrence lookup still works
    assert_eq!(story.passage("my-passage").unwrap().title, "My Passage!");
}

// S21: can_parse requires both a header marker and a link marker
#[test]
fn test_can_parse_heuristic() {
    assert!(TwineFormat.can_parse(base_markup()));
    assert!(!TwineFormat.can_parse("::Header only, no links\ntext\n"));
    assert!(!TwineFormat.can_parse("links [[only]] no headers\n"));
    assert!(!TwineFormat.can_parse(""));
    assert!(!TwineFormat.can_parse("plain prose"));
}
