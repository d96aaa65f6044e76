//! Configuration management subcommands.

use clap::Subcommand;

/// Settings commands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show all saved settings
    Show,
    /// Update saved settings
    Set {
        /// Default speech rate (0.1-10)
        #[arg(long)]
        rate: Option<f32>,
        /// Speak at zero volume by default (true/false)
        #[arg(long)]
        muted: Option<bool>,
        /// Gemini model used for sentence generation
        #[arg(long)]
        model: Option<String>,
        /// Gemini API key, stored in the data directory's .env file
        #[arg(long)]
        api_key: Option<String>,
    },
    /// Restore default settings
    Reset,
}
