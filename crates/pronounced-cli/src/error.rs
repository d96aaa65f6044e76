//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` and the other layer errors to exit codes and
//! user-facing messages.

use pronounced_core::{CoreError, PathError, RepositoryError, SentenceError};
use pronounced_playback::PlaybackError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// General failure.
    #[error("{0}")]
    Core(String),

    /// Argument or input validation error.
    #[error("{0}")]
    Arguments(String),

    /// The referenced word does not exist.
    #[error("{0}")]
    NotFound(String),

    /// No profile is signed in.
    #[error("Not signed in. Run 'pronounced login --email <address>' first.")]
    Unauthenticated,

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Sentence generation failed.
    #[error("{0}")]
    Service(String),

    /// Speech playback could not be configured.
    #[error("Playback error: {0}")]
    Playback(String),
}

impl CliError {
    /// Map error to a process exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,
            Self::NotFound(_) => 66,    // EX_NOINPUT
            Self::Service(_) => 69,     // EX_UNAVAILABLE
            Self::Playback(_) => 71,    // EX_OSERR
            Self::Database(_) => 73,    // EX_CANTCREAT (closest fit)
            Self::Io(_) => 74,          // EX_IOERR
            Self::Unauthenticated => 77, // EX_NOPERM
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }

    /// Classify an error bubbled up from a handler.
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        let err = match err.downcast::<Self>() {
            Ok(cli) => return cli,
            Err(other) => other,
        };
        let err = match err.downcast::<CoreError>() {
            Ok(core) => return core.into(),
            Err(other) => other,
        };
        let err = match err.downcast::<SentenceError>() {
            Ok(sentence) => return Self::Service(sentence.to_string()),
            Err(other) => other,
        };
        let err = match err.downcast::<PlaybackError>() {
            Ok(playback) => return playback.into(),
            Err(other) => other,
        };
        let err = match err.downcast::<PathError>() {
            Ok(path) => return Self::Config(path.to_string()),
            Err(other) => other,
        };
        match err.downcast::<std::io::Error>() {
            Ok(io) => io.into(),
            Err(other) => Self::Core(format!("{other:#}")),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(RepositoryError::NotFound(what)) => {
                Self::NotFound(format!(
                    "{what} not found. Use 'pronounced list' to see your words."
                ))
            }
            CoreError::Repository(RepositoryError::Constraint(msg)) => Self::Arguments(msg),
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::Sentence(SentenceError::EmptyWord) => {
                Self::Arguments(SentenceError::EmptyWord.to_string())
            }
            CoreError::Sentence(sentence_err) => Self::Service(sentence_err.to_string()),
            CoreError::Unauthenticated => Self::Unauthenticated,
            CoreError::Validation(msg) => Self::Arguments(msg),
        }
    }
}

impl From<PlaybackError> for CliError {
    fn from(err: PlaybackError) -> Self {
        match err {
            PlaybackError::InvalidRate(_) => Self::Arguments(err.to_string()),
            PlaybackError::NoSynthesizer(_) => Self::Playback(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
