//! Formats command
//!
//! Usage: storyloom formats

use clap::Args;
use storyloom_core::formats::FormatRegistry;

#[derive(Debug, Args)]
pub struct FormatsArgs {}

/// Execute formats command
pub fn execute(_args: FormatsArgs) -> Result<(), Box<dyn std::error::Error>> {
    for tag in FormatRegistry::new().formats() {
        println!("{}", tag);
    }
    Ok(())
}
