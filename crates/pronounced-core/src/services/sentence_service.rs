//! Sentence service - example sentence generation.

use std::sync::Arc;

use crate::ports::{SentenceError, SentenceGeneratorPort};

/// Service for generating example sentences.
pub struct SentenceService {
    generator: Arc<dyn SentenceGeneratorPort>,
}

impl SentenceService {
    /// Create a new sentence service.
    pub fn new(generator: Arc<dyn SentenceGeneratorPort>) -> Self {
        Self { generator }
    }

    /// Generate an example sentence for `word`.
    ///
    /// An empty word is rejected without calling the generator.
    pub async fn generate(&self, word: &str) -> Result<String, SentenceError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(SentenceError::EmptyWord);
        }
        self.generator.generate(word).await
    }
}
