//! Format parsing strategies.
//!
//! Each supported source format implements the [`StoryFormat`] contract: a
//! non-failing sniff used for dispatch, a parse to the canonical model, and
//! a stable tag for diagnostics. [`FormatRegistry`] holds the variants in
//! fixed priority order and routes content of unknown origin to the first
//! variant whose sniff accepts it.

pub mod json;
pub mod registry;
pub mod twine;

pub use json::JsonFormat;
pub use registry::FormatRegistry;
pub use twine::TwineFormat;

use crate::errors::Result;
use crate::model::ParsedStory;

/// Contract implemented by every input format variant.
pub trait StoryFormat {
    /// Fast heuristic check for whether this variant can claim `content`.
    ///
    /// Used purely for dispatch, not validation: it must never panic and
    /// must return `false` for anything it cannot confidently claim,
    /// including empty input.
    fn can_parse(&self, content: &str) -> bool;

    /// Parse `content` into the canonical document model.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::MalformedInput`] when the content cannot be
    /// decoded as this variant's format. Soft conditions (zero passages,
    /// missing optional fields, malformed sub-segments) degrade inside the
    /// returned document instead of failing the parse.
    ///
    /// [`StoryError::MalformedInput`]: crate::errors::StoryError::MalformedInput
    fn parse(&self, content: &str) -> Result<ParsedStory>;

    /// Stable lowercase tag identifying this variant (`"json"`, `"twine"`).
    ///
    /// Used for diagnostics and export round-tripping, never for dispatch.
    fn format(&self) -> &'static str;
}
