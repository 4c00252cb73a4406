//! Structural diff computation engine.
//!
//! The core entry point is [`diff_stories`], which accepts two canonical
//! documents and produces a [`StoryDiff`].

use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

use crate::diff::model::StoryDiff;
use crate::model::{ParsedPassage, ParsedStory};

/// Compute a structural, deterministic diff between two documents.
///
/// Pure function over the two inputs: never fails, allocates only the
/// result, and iteration order cannot affect set membership. Equality is
/// structural throughout: strings byte-wise, sequences ordered, metadata
/// bags key-wise with absent (`None`) distinct from present-but-empty.
///
/// A passage counts as modified when its `content`, `title`, or `links`
/// differ between the two sides. Tag and position changes alone do not
/// mark a passage modified.
///
/// Duplicate passage ids are tolerated: each side is indexed by id with
/// the last occurrence winning before the sets are computed.
pub fn diff_stories(previous: &ParsedStory, current: &ParsedStory) -> StoryDiff {
    // Fast path: structurally equal documents
    if previous == current {
        trace!("documents compare equal");
        return StoryDiff::default();
    }

    let previous_index = index_by_id(&previous.passages);
    let current_index = index_by_id(&current.passages);

    let (added, removed) = set_delta(&previous_index, &current_index);

    let mut modified = BTreeSet::new();
    for (id, previous_passage) in &previous_index {
        if let Some(current_passage) = current_index.get(id) {
            if passage_changed(previous_passage, current_passage) {
                modified.insert((*id).to_string());
            }
        }
    }

    let diff = StoryDiff {
        added,
        removed,
        modified,
        metadata_changed: previous.metadata != current.metadata,
        variables_changed: previous.variables != current.variables,
    };
    debug!(
        added = diff.added.len(),
        removed = diff.removed.len(),
        modified = diff.modified.len(),
        metadata_changed = diff.metadata_changed,
        variables_changed = diff.variables_changed,
        "computed structural diff"
    );
    diff
}

/// Index passages by id; on duplicate ids the last occurrence wins.
fn index_by_id(passages: &[ParsedPassage]) -> BTreeMap<&str, &ParsedPassage> {
    passages.iter().map(|p| (p.id.as_str(), p)).collect()
}

/// Compute `(added, removed)` id sets between the two indexes.
fn set_delta(
    previous: &BTreeMap<&str, &ParsedPassage>,
    current: &BTreeMap<&str, &ParsedPassage>,
) -> (BTreeSet<String>, BTreeSet<String>) {
    let added = current
        .keys()
        .filter(|id| !previous.contains_key(*id))
        .map(|id| id.to_string())
        .collect();
    let removed = previous
        .keys()
        .filter(|id| !current.contains_key(*id))
        .map(|id| id.to_string())
        .collect();
    (added, removed)
}

/// Deep value comparison of the fields that make a passage "modified".
fn passage_changed(previous: &ParsedPassage, current: &ParsedPassage) -> bool {
    previous.content != current.content
        || previous.title != current.title
        || previous.links != current.links
}
