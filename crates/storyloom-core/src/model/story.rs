use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::errors::{Result, StoryError};
use crate::model::metadata::Metadata;
use crate::model::passage::ParsedPassage;

/// Placeholder title used when a source format declares no title
pub const DEFAULT_TITLE: &str = "Untitled Story";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Canonical story document, the format-agnostic shape every parser
/// produces and every diff consumes
///
/// Created fresh by a parse call and immutable thereafter from the core's
/// perspective; ownership transfers to whatever consumes it (editor state,
/// storage, export tooling).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedStory {
    /// Story title; [`DEFAULT_TITLE`] when the source declares none
    #[serde(default = "default_title")]
    pub title: String,

    /// Optional author attribution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Passages in source-document order, not semantic order
    #[serde(default)]
    pub passages: Vec<ParsedPassage>,

    /// Passthrough bag for format-specific extras, including any unknown
    /// top-level members of an interchange document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    /// Story-level variable payload, kept apart from `metadata` so variable
    /// changes can be detected independently
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Metadata>,
}

impl ParsedStory {
    /// Create an empty story with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            passages: Vec::new(),
            metadata: None,
            variables: None,
        }
    }

    /// Find a passage by id (first occurrence when ids collide)
    pub fn passage(&self, id: &str) -> Option<&ParsedPassage> {
        self.passages.iter().find(|p| p.id == id)
    }

    /// Check whether every passage id is unique within this document
    ///
    /// Parsing never deduplicates ids: distinct markup titles can slug to
    /// the same id. Callers that depend on unique addressing opt in here.
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = BTreeSet::new();
        self.passages.iter().all(|p| seen.insert(p.id.as_str()))
    }

    /// Strict form of [`has_unique_ids`](Self::has_unique_ids)
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::DuplicatePassageId`] naming the first id that
    /// occurs more than once, in passage order.
    pub fn check_unique_ids(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for passage in &self.passages {
            if !seen.insert(passage.id.as_str()) {
                return Err(StoryError::DuplicatePassageId {
                    id: passage.id.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for ParsedStory {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}
