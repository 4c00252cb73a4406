//! Import command
//!
//! Usage: storyloom import <PATH> [--format <TAG>] [--pretty] [--output <FILE>]

use clap::Args;
use std::path::PathBuf;
use storyloom_core::formats::FormatRegistry;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to the story file (markup or interchange JSON)
    pub path: PathBuf,

    /// Force a format tag instead of detecting one (see `formats`)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Pretty-print the canonical JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute import command
pub fn execute(args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(&args.path)?;

    // Parse via a forced format tag, or let the registry detect one
    let registry = FormatRegistry::new();
    let story = match &args.format {
        Some(tag) => {
            let parser = registry
                .by_tag(tag)
                .ok_or_else(|| format!("unknown format tag: {}", tag))?;
            parser.parse(&content)?
        }
        None => registry.parse(&content)?,
    };

    let encoded = if args.pretty {
        serde_json::to_string_pretty(&story)?
    } else {
        serde_json::to_string(&story)?
    };

    // Output
    if let Some(output_path) = args.output {
        std::fs::write(&output_path, encoded)?;
        println!(
            "✓ Imported {} passage(s) to {}",
            story.passages.len(),
            output_path.display()
        );
    } else {
        println!("{}", encoded);
    }

    Ok(())
}
