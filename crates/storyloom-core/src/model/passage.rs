use serde::{Deserialize, Serialize};

/// Canvas placement hint for a passage in the visual graph editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal canvas coordinate
    pub x: i64,
    /// Vertical canvas coordinate
    pub y: i64,
}

/// One narrative node of a story
///
/// Each passage:
/// - Is addressed by a stable, URL/DOM-safe `id` (for markup-derived
///   passages, the deterministic slug of the title)
/// - Carries its body with all markup wrapper syntax stripped
/// - Lists outgoing link targets in order of first occurrence, duplicates
///   preserved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedPassage {
    /// Stable identifier; the addressing key for diffing and linking
    pub id: String,

    /// Human-readable title; need not be unique within a document
    pub title: String,

    /// Passage body with link/tag/position wrapper syntax removed
    #[serde(default)]
    pub content: String,

    /// Declared tags in source order; empty when none declared
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Canvas placement, absent when not declared in source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Target passage titles referenced from the body, in order of first
    /// occurrence; aliased display labels are discarded in favor of targets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
}

impl ParsedPassage {
    /// Create a passage with the given id and title and no body
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            content: String::new(),
            tags: Vec::new(),
            position: None,
            links: Vec::new(),
        }
    }

    /// Check if this passage has the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check if this passage is an ending (no outgoing links)
    pub fn is_terminal(&self) -> bool {
        self.links.is_empty()
    }
}
