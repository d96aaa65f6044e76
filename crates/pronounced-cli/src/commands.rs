//! Main commands enum and primary subcommands.

use clap::{Args, Subcommand};

use crate::config_commands::ConfigCommand;

/// Speech flags shared by `say` and `play-all`.
///
/// These override the saved settings for one invocation only.
#[derive(Args, Debug, Clone, Default)]
pub struct SpeechArgs {
    /// Speech rate (0.1-10; presets 0.5, 0.75, 1, 1.25, 1.5, 2)
    #[arg(short, long)]
    pub rate: Option<f32>,

    /// Speak at zero volume
    #[arg(long)]
    pub mute: bool,

    /// Simulate speech timing without audio
    #[arg(long)]
    pub silent: bool,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Sign in to a local profile (created on first use)
    Login {
        /// Email address identifying the profile
        #[arg(long)]
        email: String,
        /// Display name shown in greetings
        #[arg(long)]
        name: Option<String>,
    },

    /// Sign out of the current profile
    Logout,

    /// Show the signed-in profile
    Whoami,

    /// Add a word to your vocabulary
    Add {
        /// The word or phrase to practice
        word: String,
        /// Example sentence using the word
        #[arg(short, long)]
        sentence: Option<String>,
        /// Generate the example sentence with Gemini
        #[arg(short, long, conflicts_with = "sentence")]
        generate: bool,
    },

    /// Edit a word
    Edit {
        /// Word ID or unique ID prefix
        id: String,
        /// New text for the word
        #[arg(long)]
        word: Option<String>,
        /// New example sentence
        #[arg(short, long)]
        sentence: Option<String>,
        /// Remove the example sentence
        #[arg(long, conflicts_with = "sentence")]
        clear_sentence: bool,
    },

    /// Remove a word
    Remove {
        /// Word ID or unique ID prefix
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Toggle a word's favorite flag
    Favorite {
        /// Word ID or unique ID prefix
        id: String,
    },

    /// List your words (favorites first, then newest)
    List {
        /// Only show words whose text or sentence contains this
        #[arg(short, long)]
        search: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Generate an example sentence for a word without saving it
    Generate {
        /// The word to use
        word: String,
    },

    /// Speak one word, or its example sentence
    Say {
        /// Word ID or unique ID prefix
        id: String,
        /// Speak the example sentence instead of the word
        #[arg(long)]
        sentence: bool,
        #[command(flatten)]
        speech: SpeechArgs,
    },

    /// Speak every word in practice order, each followed by its sentence
    PlayAll {
        /// Restrict to matching words (all words play when nothing matches)
        #[arg(short, long)]
        search: Option<String>,
        #[command(flatten)]
        speech: SpeechArgs,
    },

    /// View or change saved settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Show resolved data paths
    Paths,
}
