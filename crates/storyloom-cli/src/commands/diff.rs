//! Diff command
//!
//! Usage: storyloom diff <PREVIOUS> <CURRENT> [--json]

use clap::Args;
use std::path::PathBuf;
use storyloom_core::diff::{diff_stories, render_summary};
use storyloom_core::formats::FormatRegistry;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Path to the previous story revision
    pub previous: PathBuf,

    /// Path to the current story revision
    pub current: PathBuf,

    /// Emit the structured diff as JSON instead of a summary line
    #[arg(long)]
    pub json: bool,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let registry = FormatRegistry::new();

    // The two revisions need not share a source format
    let previous = registry.parse(&std::fs::read_to_string(&args.previous)?)?;
    let current = registry.parse(&std::fs::read_to_string(&args.current)?)?;

    let diff = diff_stories(&previous, &current);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
    } else {
        println!("{}", render_summary(&diff));
    }

    Ok(())
}
