use thiserror::Error;

/// Result type alias using StoryError
pub type Result<T> = std::result::Result<T, StoryError>;

/// Maximum number of characters of input retained in an
/// [`StoryError::UnsupportedFormat`] excerpt.
pub const EXCERPT_MAX_CHARS: usize = 80;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and external API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryErrorKind {
    /// Content claims a format but its decode step failed
    MalformedInput,
    /// No registered format variant accepts the content
    UnsupportedFormat,
    /// Two passages in one document share an id
    DuplicatePassageId,
    /// JSON encoding/decoding failed outside a format parse
    Serialization,
}

impl StoryErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            StoryErrorKind::MalformedInput => "ERR_MALFORMED_INPUT",
            StoryErrorKind::UnsupportedFormat => "ERR_UNSUPPORTED_FORMAT",
            StoryErrorKind::DuplicatePassageId => "ERR_DUPLICATE_PASSAGE_ID",
            StoryErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Error taxonomy for story ingestion and diffing
///
/// Parse-time errors abort the whole document parse; no partial document is
/// ever returned alongside an error. Diffing has no error path at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoryError {
    /// Content was routed to a format whose decode step rejected it.
    /// Carries the underlying decode failure message.
    #[error("malformed {format} input: {cause}")]
    MalformedInput { format: &'static str, cause: String },

    /// No registered format variant accepted the content. Carries a bounded
    /// leading excerpt for diagnostics, never the whole document.
    #[error("unsupported story format (content starts with {excerpt:?})")]
    UnsupportedFormat { excerpt: String },

    /// Two passages share one id. Raised only by the opt-in uniqueness
    /// check, never by parsing itself.
    #[error("duplicate passage id: {id}")]
    DuplicatePassageId { id: String },

    /// JSON encoding/decoding error outside a format parse
    #[error("serialization error: {message}")]
    Serialization { message: String },
}

impl StoryError {
    /// Get the error kind
    pub fn kind(&self) -> StoryErrorKind {
        match self {
            StoryError::MalformedInput { .. } => StoryErrorKind::MalformedInput,
            StoryError::UnsupportedFormat { .. } => StoryErrorKind::UnsupportedFormat,
            StoryError::DuplicatePassageId { .. } => StoryErrorKind::DuplicatePassageId,
            StoryError::Serialization { .. } => StoryErrorKind::Serialization,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

/// Conversion from serde_json::Error to StoryError
impl From<serde_json::Error> for StoryError {
    fn from(err: serde_json::Error) -> Self {
        StoryError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Take the leading `max_chars` characters of `content` for diagnostics.
///
/// Operates on character boundaries, so multi-byte input never splits a
/// code point.
pub fn leading_excerpt(content: &str, max_chars: usize) -> String {
    content.chars().take(max_chars).collect()
}
