//! Gemini client for example-sentence generation.

use url::Url;

use crate::config::{API_KEY_ENV, GeminiConfig};
use crate::error::{GeminiError, GeminiResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{GenerateContentRequest, GenerateContentResponse};
use crate::prompt::sentence_prompt;

/// Default Gemini client using the reqwest HTTP backend.
pub type DefaultGeminiClient = GeminiClient<ReqwestBackend>;

/// Client for the Gemini `generateContent` endpoint.
///
/// Generic over the HTTP backend so tests can inject a fake. Use
/// [`DefaultGeminiClient`] in production code.
pub struct GeminiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: GeminiConfig,
}

impl DefaultGeminiClient {
    /// Create a new client with the given configuration.
    ///
    /// A missing API key is not an error here: it is logged once and every
    /// later request fails.
    pub fn new(config: &GeminiConfig) -> GeminiResult<Self> {
        let backend = ReqwestBackend::new(config.timeout)?;
        Ok(Self::with_backend(config.clone(), backend))
    }
}

impl<B: HttpBackend> GeminiClient<B> {
    pub(crate) fn with_backend(config: GeminiConfig, backend: B) -> Self {
        if !config.has_api_key() {
            tracing::warn!(
                "Gemini API key is not set. Set {API_KEY_ENV} in your environment or .env file."
            );
        }
        Self { backend, config }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// `{base}/models/{model}:generateContent?key={key}`
    fn endpoint(&self, api_key: &str) -> GeminiResult<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!(
            "{base}/models/{}:generateContent",
            self.config.model
        ))?;
        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url)
    }

    /// Ask the model for one practice sentence using `word`.
    pub async fn generate_sentence(&self, word: &str) -> GeminiResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GeminiError::MissingApiKey)?;
        let url = self.endpoint(api_key)?;
        let request = GenerateContentRequest::from_prompt(sentence_prompt(word));

        tracing::debug!(%word, model = %self.config.model, "Requesting example sentence");
        let response: GenerateContentResponse = self.backend.post_json(&url, &request).await?;

        response.text().ok_or_else(|| GeminiError::InvalidResponse {
            message: format!(
                "no sentence in response (finish reason: {})",
                response.finish_reason().unwrap_or("none")
            ),
        })
    }
}
