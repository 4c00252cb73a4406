//! Structural diff engine.
//!
//! Compares two canonical story documents and produces a set-based,
//! deterministic diff suitable for change review, versioning, and
//! three-way merge front-ends.
//!
//! ## Entry point
//!
//! ```
//! use storyloom_core::diff::{diff_stories, render_summary};
//! use storyloom_core::model::ParsedStory;
//!
//! let previous = ParsedStory::new("Quest");
//! let current = ParsedStory::new("Quest");
//! let diff = diff_stories(&previous, &current);
//! assert_eq!(render_summary(&diff), "No changes");
//! ```
//!
//! ## Guarantees
//!
//! - **No failure path**: any two documents always produce a diff.
//! - **Determinism**: set membership is a pure function of the two input
//!   values; iteration order never leaks into the result.
//! - **Exclusivity**: a passage id lands in exactly one of added, removed,
//!   or modified.

pub mod engine;
pub mod human_summary;
pub mod model;

pub use engine::diff_stories;
pub use human_summary::render_summary;
pub use model::StoryDiff;
