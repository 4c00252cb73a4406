//! Storyloom Core - Format ingestion and structural diff for branching stories
//!
//! This crate provides the foundational data structures and operations for
//! Storyloom, including:
//! - Canonical story model (`ParsedStory`, `ParsedPassage`) independent of any
//!   authoring format
//! - Pluggable format parsers behind the `StoryFormat` trait, with Twine-style
//!   markup and JSON interchange implementations
//! - Format detection and dispatch via `FormatRegistry`
//! - Deterministic structural diffing between story revisions
//! - Human-readable change summaries for review surfaces
//!
//! Parsing is permissive: recognizable input always yields a story, and
//! malformed fragments degrade to defaults rather than failing the whole
//! document.

pub mod diff;
pub mod errors;
pub mod extract;
pub mod formats;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use diff::{diff_stories, render_summary, StoryDiff};
pub use errors::{Result, StoryError, StoryErrorKind};
pub use formats::{FormatRegistry, JsonFormat, StoryFormat, TwineFormat};
pub use model::{Metadata, ParsedPassage, ParsedStory, Position};
