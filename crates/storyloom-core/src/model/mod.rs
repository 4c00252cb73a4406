pub mod metadata;
pub mod passage;
pub mod story;

pub use metadata::Metadata;
pub use passage::{ParsedPassage, Position};
pub use story::{ParsedStory, DEFAULT_TITLE};
