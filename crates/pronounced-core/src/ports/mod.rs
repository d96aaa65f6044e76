//! Interfaces the core expects from the outside world.
//!
//! Storage, identity and sentence generation are async traits implemented by
//! adapter crates. Speech is callback based: a backend reports completion
//! through [`CompletionCallback`] and the playback controller does the
//! waiting. No adapter types (`sqlx`, `reqwest`) appear in any signature.

pub mod auth;
pub mod sentence;
pub mod settings_repository;
pub mod speech;
pub mod word_repository;

use std::sync::Arc;
use thiserror::Error;

pub use auth::AuthProvider;
pub use sentence::{SentenceError, SentenceGeneratorPort};
pub use settings_repository::SettingsRepository;
pub use speech::{CompletionCallback, SpeechBackend, SpeechOutcome, Utterance};
pub use word_repository::WordRepository;

/// Storage-backed ports, handed to [`AppCore`](crate::AppCore) as one bundle.
#[derive(Clone)]
pub struct Repos {
    pub words: Arc<dyn WordRepository>,
    pub auth: Arc<dyn AuthProvider>,
    pub settings: Arc<dyn SettingsRepository>,
}

impl Repos {
    pub fn new(
        words: Arc<dyn WordRepository>,
        auth: Arc<dyn AuthProvider>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            words,
            auth,
            settings,
        }
    }
}

/// Storage failures, stripped of driver types.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store rejected the write, e.g. an empty word.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored value could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors returned by the core services.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    #[error(transparent)]
    Sentence(#[from] SentenceError),

    #[error("Not signed in")]
    Unauthenticated,

    /// Bad user input. The message is shown as is.
    #[error("{0}")]
    Validation(String),
}

impl CoreError {
    /// Whether this error means the requested entity does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::NotFound(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = CoreError::Validation("Please enter a word".into());
        assert_eq!(err.to_string(), "Please enter a word");
    }

    #[test]
    fn test_repository_error_is_transparent() {
        let err = CoreError::from(RepositoryError::NotFound("word 42".into()));
        assert_eq!(err.to_string(), "Not found: word 42");
        assert!(err.is_not_found());
        assert!(!CoreError::Unauthenticated.is_not_found());
    }
}
