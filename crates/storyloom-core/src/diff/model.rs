//! Structural diff data model.
//!
//! Collections use `BTreeSet` for deterministic iteration and
//! serialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set-based delta between two canonical story documents.
///
/// A passage id appears in at most one of the three sets: ids only in the
/// current document are `added`, ids only in the previous document are
/// `removed`, and ids in both whose content, title, or links differ are
/// `modified`. The two flags report presence of change over the whole
/// metadata/variables payload, not which fields changed.
///
/// A diff is a transient value computed on demand; it has no lifecycle of
/// its own and is serializable for downstream review tooling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StoryDiff {
    /// Ids present only in the current document
    pub added: BTreeSet<String>,

    /// Ids present only in the previous document
    pub removed: BTreeSet<String>,

    /// Ids present in both documents with differing content, title, or
    /// links
    pub modified: BTreeSet<String>,

    /// Whole-payload equality flag over the documents' `metadata`
    pub metadata_changed: bool,

    /// Whole-payload equality flag over the documents' `variables`
    pub variables_changed: bool,
}

impl StoryDiff {
    /// Check if this diff records no change at all
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
            && self.removed.is_empty()
            && self.modified.is_empty()
            && !self.metadata_changed
            && !self.variables_changed
    }

    /// Check if this diff records any change
    pub fn has_changes(&self) -> bool {
        !self.is_empty()
    }
}
