//! Link-markup format (Twine-style narrative source).
//!
//! Recognizes the passage-delimited markup grammar:
//!
//! ```text
//! ::Title [tag1 tag2] {x,y}
//! body text with [[Link]] or [[Display|Target]]
//! ```
//!
//! Parsing is a two-pass scan. Pass one splits the input into passages at
//! `::` header lines. Pass two decodes each header and body with the
//! sub-scans in [`crate::extract`]. Every pass is a single forward walk,
//! linear in input length, with no backtracking and no per-passage
//! recursion.

use tracing::debug;

use crate::errors::Result;
use crate::extract::{extract_links, parse_header, rewrite_links, slug, PassageHeader};
use crate::formats::StoryFormat;
use crate::model::{ParsedPassage, ParsedStory};

/// Parser for the `::`-delimited link-markup narrative format.
#[derive(Debug, Default)]
pub struct TwineFormat;

impl StoryFormat for TwineFormat {
    /// Requires both a header marker and a link marker somewhere in the
    /// content. A heuristic, not a well-formedness guarantee.
    fn can_parse(&self, content: &str) -> bool {
        content.contains("::") && content.contains("[[")
    }

    fn parse(&self, content: &str) -> Result<ParsedStory> {
        Ok(parse_markup(content))
    }

    fn format(&self) -> &'static str {
        "twine"
    }
}

/// Pass one: split the input into passages at `::` header lines.
///
/// A passage body runs until the next header or end of input; the final
/// passage needs no trailing newline. Text before the first header belongs
/// to no passage and is ignored. Finding zero passages is not an error:
/// the result is an empty document with the default title.
fn parse_markup(content: &str) -> ParsedStory {
    let mut passages = Vec::new();
    let mut open: Option<(PassageHeader, Vec<&str>)> = None;

    for line in content.lines() {
        if let Some(header_text) = line.strip_prefix("::") {
            if let Some((header, body)) = open.take() {
                passages.push(build_passage(header, &body));
            }
            open = Some((parse_header(header_text), Vec::new()));
        } else if let Some((_, body)) = open.as_mut() {
            body.push(line);
        }
    }
    if let Some((header, body)) = open.take() {
        passages.push(build_passage(header, &body));
    }

    debug!(passages = passages.len(), "scanned markup document");

    ParsedStory {
        passages,
        ..ParsedStory::default()
    }
}

/// Pass two: decode one passage from its header parts and body lines.
///
/// The body is trimmed of leading/trailing whitespace; link targets are
/// collected in body order (duplicates preserved) and the stored content
/// keeps each link's display text with the wrapper syntax removed.
fn build_passage(header: PassageHeader, body_lines: &[&str]) -> ParsedPassage {
    let body = body_lines.join("\n");
    let body = body.trim();
    let links = extract_links(body).into_iter().map(|l| l.target).collect();
    ParsedPassage {
        id: slug(&header.title),
        title: header.title,
        content: rewrite_links(body),
        tags: header.tags,
        position: header.position,
        links,
    }
}
