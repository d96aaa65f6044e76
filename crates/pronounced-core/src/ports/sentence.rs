//! Sentence generator port.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by sentence generation.
///
/// Backend faults of any kind collapse into `GenerationFailed`; adapters log
/// the underlying cause before returning it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SentenceError {
    /// The word was empty after trimming.
    #[error("Please enter a word first")]
    EmptyWord,

    /// The generator could not produce a sentence.
    #[error("Failed to generate sentence")]
    GenerationFailed,
}

/// Produces an example sentence for a word.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SentenceGeneratorPort: Send + Sync {
    /// Generate one short example sentence using `word`.
    ///
    /// `word` is already trimmed and non-empty.
    async fn generate(&self, word: &str) -> Result<String, SentenceError>;
}
