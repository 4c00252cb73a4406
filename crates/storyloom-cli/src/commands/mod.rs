//! CLI command implementations

pub mod diff;
pub mod formats;
pub mod import;
