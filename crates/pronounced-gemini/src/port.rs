//! `SentenceGeneratorPort` implementation for `GeminiClient`.

use async_trait::async_trait;
use pronounced_core::{SentenceError, SentenceGeneratorPort};

use crate::client::GeminiClient;
use crate::http::HttpBackend;

#[async_trait]
impl<B: HttpBackend + 'static> SentenceGeneratorPort for GeminiClient<B> {
    async fn generate(&self, word: &str) -> Result<String, SentenceError> {
        self.generate_sentence(word).await.map_err(|e| {
            tracing::error!(error = %e, %word, "Error generating sentence with Gemini");
            SentenceError::GenerationFailed
        })
    }
}
