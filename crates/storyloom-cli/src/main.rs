//! Storyloom CLI
//!
//! Command-line interface for Storyloom

use clap::{Parser, Subcommand};
use storyloom_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "storyloom")]
#[command(about = "Storyloom - Branching story ingestion and diffing", long_about = None)]
struct Cli {
    /// Enable debug logging to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Import a story file and emit the canonical JSON form
    Import(commands::import::ImportArgs),
    /// Compare two story revisions
    Diff(commands::diff::DiffArgs),
    /// List registered story formats
    Formats(commands::formats::FormatsArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(if cli.verbose {
        Profile::Development
    } else {
        Profile::Test
    });

    let result = match cli.command {
        Commands::Import(args) => commands::import::execute(args),
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Formats(args) => commands::formats::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
