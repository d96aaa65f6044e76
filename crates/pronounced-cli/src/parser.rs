//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for pronunciation practice.
///
/// Handles global options and dispatches to subcommands.
#[derive(Parser)]
#[command(name = "pronounced")]
#[command(about = "Practice pronouncing your own vocabulary")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
