//! Human-readable summary renderer for structural diffs.

use crate::diff::model::StoryDiff;

/// Render a one-line human-readable summary of a [`StoryDiff`].
///
/// Clauses appear comma-joined in fixed order (added, removed, modified,
/// metadata, variables); clauses whose condition is false or zero are
/// omitted. When every clause is omitted the result is exactly
/// `"No changes"`. Informational only: the summary never affects the
/// structured diff.
pub fn render_summary(diff: &StoryDiff) -> String {
    let mut clauses: Vec<String> = Vec::new();

    if !diff.added.is_empty() {
        clauses.push(format!("{} passage(s) added", diff.added.len()));
    }
    if !diff.removed.is_empty() {
        clauses.push(format!("{} passage(s) removed", diff.removed.len()));
    }
    if !diff.modified.is_empty() {
        clauses.push(format!("{} passage(s) modified", diff.modified.len()));
    }
    if diff.metadata_changed {
        clauses.push("metadata changed".to_string());
    }
    if diff.variables_changed {
        clauses.push("variables changed".to_string());
    }

    if clauses.is_empty() {
        "No changes".to_string()
    } else {
        clauses.join(", ")
    }
}
