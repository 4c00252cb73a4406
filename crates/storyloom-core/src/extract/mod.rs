//! Pure text-scanning routines shared by the format parsers.
//!
//! Everything here is a forward scan over a borrowed string slice: linear
//! in input length, allocation only for outputs, and no failure paths.
//! Malformed substrings degrade to empty/absent values.

pub mod header;
pub mod links;
pub mod slug;

pub use header::{parse_header, PassageHeader};
pub use links::{extract_links, rewrite_links, LinkSpan};
pub use slug::slug;
