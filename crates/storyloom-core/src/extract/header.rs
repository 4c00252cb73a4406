//! Passage header sub-scans.
//!
//! A markup passage header line carries a title plus an optional bracketed
//! tag list and an optional braced position:
//!
//! ```text
//! ::Title [tag1 tag2] {x,y}
//! ```
//!
//! Malformed segments never fail the parse; they degrade to empty tags or
//! an absent position. Partial documents are more useful to an editor than
//! a hard failure on a single malformed line.

use tracing::warn;

use crate::model::Position;

/// Decoded parts of one passage header line (without the `::` marker).
#[derive(Debug, Clone, PartialEq)]
pub struct PassageHeader {
    /// Title text before any tag/position segment, trimmed
    pub title: String,
    /// Whitespace-separated tag tokens; empty when absent or malformed
    pub tags: Vec<String>,
    /// Canvas position; `None` when absent or malformed
    pub position: Option<Position>,
}

/// Scan one header line into its title, tag list, and position.
pub fn parse_header(line: &str) -> PassageHeader {
    let bracket_start = line.find('[');
    let brace_start = line.find('{');

    let title_end = match (bracket_start, brace_start) {
        (Some(b), Some(c)) => b.min(c),
        (Some(b), None) => b,
        (None, Some(c)) => c,
        (None, None) => line.len(),
    };
    let title = line[..title_end].trim().to_string();

    let tags = match bracket_start {
        Some(start) => match segment(line, start, ']') {
            Some(inner) => inner.split_whitespace().map(str::to_string).collect(),
            None => {
                warn!(title = %title, "unterminated tag list in passage header");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let position = brace_start.and_then(|start| match segment(line, start, '}') {
        Some(inner) => parse_position(inner, &title),
        None => {
            warn!(title = %title, "unterminated position in passage header");
            None
        }
    });

    PassageHeader {
        title,
        tags,
        position,
    }
}

/// Inner text of a delimited segment opening at `start`, up to `close`.
fn segment(line: &str, start: usize, close: char) -> Option<&str> {
    let inner_start = start + 1;
    let inner_len = line[inner_start..].find(close)?;
    Some(&line[inner_start..inner_start + inner_len])
}

/// Parse an `x,y` integer pair; anything else degrades to `None`.
fn parse_position(inner: &str, title: &str) -> Option<Position> {
    let (x_text, y_text) = match inner.split_once(',') {
        Some(parts) => parts,
        None => {
            warn!(title = %title, "position is not an x,y pair");
            return None;
        }
    };
    if y_text.contains(',') {
        warn!(title = %title, "position has more than two components");
        return None;
    }
    match (
        x_text.trim().parse::<i64>(),
        y_text.trim().parse::<i64>(),
    ) {
        (Ok(x), Ok(y)) => Some(Position { x, y }),
        _ => {
            warn!(title = %title, "position components are not integers");
            None
        }
    }
}
