//! Structured logging facility for Storyloom
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Profile-based output (human-readable, JSON, or test capture)
//! - Environment-driven filtering via `RUST_LOG`
//!
//! Library code itself only emits `tracing` events; it never installs a
//! subscriber. Binaries call `init` once at startup and pick a profile.
//!
//! # Usage
//!
//! ```rust
//! use storyloom_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;

pub use init::{init, Profile};
