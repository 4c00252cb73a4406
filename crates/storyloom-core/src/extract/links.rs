//! Wiki-style link extraction and rewriting.
//!
//! Passage bodies reference other passages with `[[Target]]` or
//! `[[Display|Target]]`. Both operations here are single forward scans over
//! the body, linear in its length: no regular expressions, no backtracking.

/// One link occurrence inside a passage body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpan {
    /// Target passage title. For the aliased form this is the segment after
    /// the first pipe; the display label is never the stored value.
    pub target: String,
    /// Display label (segment before the first pipe), aliased form only
    pub label: Option<String>,
    /// Byte offset of the opening `[[` in the body
    pub offset: usize,
}

impl LinkSpan {
    /// The text a reader sees at this position: the label when aliased,
    /// otherwise the target itself.
    pub fn display_text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.target)
    }
}

/// Locate the next `[[...]]` occurrence at or after `from`.
///
/// Returns the byte range of the whole occurrence (including delimiters)
/// and the inner text. An opening `[[` with no closing `]]` is literal text
/// and ends the scan.
fn next_link(body: &str, from: usize) -> Option<(usize, usize, &str)> {
    let start = body[from..].find("[[")? + from;
    let inner_start = start + 2;
    let inner_len = body[inner_start..].find("]]")?;
    let end = inner_start + inner_len + 2;
    Some((start, end, &body[inner_start..inner_start + inner_len]))
}

/// Split inner link text into an optional display label and the target.
fn split_alias(inner: &str) -> (Option<&str>, &str) {
    match inner.split_once('|') {
        Some((label, target)) => (Some(label), target),
        None => (None, inner),
    }
}

/// Scan `body` for every link occurrence, in body order.
///
/// Multiple links per line are found, duplicates are preserved, and the
/// final link is captured even at end of input. An empty occurrence `[[]]`
/// links to nothing and is skipped.
pub fn extract_links(body: &str) -> Vec<LinkSpan> {
    let mut links = Vec::new();
    let mut pos = 0;
    while let Some((start, end, inner)) = next_link(body, pos) {
        let (label, target) = split_alias(inner);
        if !target.is_empty() {
            links.push(LinkSpan {
                target: target.to_string(),
                label: label.map(str::to_string),
                offset: start,
            });
        }
        pos = end;
    }
    links
}

/// Rewrite `body` with every `[[...]]` wrapper removed.
///
/// Each occurrence is replaced by its display text, so the result reads as
/// prose and retains none of the raw bracket syntax.
pub fn rewrite_links(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut pos = 0;
    while let Some((start, end, inner)) = next_link(body, pos) {
        out.push_str(&body[pos..start]);
        let (label, target) = split_alias(inner);
        out.push_str(label.unwrap_or(target));
        pos = end;
    }
    out.push_str(&body[pos..]);
    out
}
