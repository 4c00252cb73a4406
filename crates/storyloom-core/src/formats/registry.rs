//! Parser selection over the registered format variants.

use tracing::debug;

use crate::errors::{leading_excerpt, Result, StoryError, EXCERPT_MAX_CHARS};
use crate::formats::{JsonFormat, StoryFormat, TwineFormat};
use crate::model::ParsedStory;

/// Ordered collection of format variants.
///
/// Registration order is the dispatch priority: [`detect`](Self::detect)
/// returns the first variant whose sniff accepts the content. The built-in
/// order is fixed (`json`, then `twine`) so that degenerate content
/// satisfying both sniffs always resolves the same way.
pub struct FormatRegistry {
    parsers: Vec<Box<dyn StoryFormat>>,
}

impl FormatRegistry {
    /// Create a registry with the built-in variants in their fixed order
    pub fn new() -> Self {
        Self::with_formats(vec![Box::new(JsonFormat), Box::new(TwineFormat)])
    }

    /// Create a registry from an explicit variant list (order = priority)
    pub fn with_formats(parsers: Vec<Box<dyn StoryFormat>>) -> Self {
        Self { parsers }
    }

    /// Append a variant at the lowest priority
    pub fn register(&mut self, parser: Box<dyn StoryFormat>) {
        self.parsers.push(parser);
    }

    /// First registered variant whose sniff accepts the content
    pub fn detect(&self, content: &str) -> Option<&dyn StoryFormat> {
        self.parsers
            .iter()
            .find(|parser| parser.can_parse(content))
            .map(|parser| parser.as_ref())
    }

    /// Look up a variant by its stable format tag
    pub fn by_tag(&self, tag: &str) -> Option<&dyn StoryFormat> {
        self.parsers
            .iter()
            .find(|parser| parser.format() == tag)
            .map(|parser| parser.as_ref())
    }

    /// Registered format tags in priority order
    pub fn formats(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|parser| parser.format()).collect()
    }

    /// Parse content of unknown origin with the first matching variant.
    ///
    /// # Errors
    ///
    /// - [`StoryError::UnsupportedFormat`] — no variant's sniff accepts the
    ///   content; the error carries a bounded leading excerpt of the input,
    ///   never the whole document
    /// - [`StoryError::MalformedInput`] — the matched variant's decode step
    ///   rejects the content
    pub fn parse(&self, content: &str) -> Result<ParsedStory> {
        match self.detect(content) {
            Some(parser) => {
                debug!(format = parser.format(), "format detected");
                parser.parse(content)
            }
            None => Err(StoryError::UnsupportedFormat {
                excerpt: leading_excerpt(content, EXCERPT_MAX_CHARS),
            }),
        }
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
