//! Public configuration for the Gemini client.

use std::time::Duration;

use pronounced_core::DEFAULT_SENTENCE_MODEL;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Root of the Gemini REST API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Gemini client.
///
/// # Example
///
/// ```
/// use pronounced_gemini::GeminiConfig;
/// use std::time::Duration;
///
/// let config = GeminiConfig::new()
///     .with_api_key("secret")
///     .with_timeout(Duration::from_secs(10));
/// assert!(config.has_api_key());
/// ```
#[derive(Clone)]
pub struct GeminiConfig {
    pub(crate) base_url: String,
    pub(crate) model: String,
    pub(crate) timeout: Duration,
    pub(crate) api_key: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_SENTENCE_MODEL.to_string(),
            timeout: Duration::from_secs(30),
            api_key: None,
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl GeminiConfig {
    /// Create a new configuration with default settings and no API key.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults plus the API key from `GEMINI_API_KEY`, if set and non-blank.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new().with_optional_api_key(std::env::var(API_KEY_ENV).ok())
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model used for generation. Blank names keep the current model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        if !model.trim().is_empty() {
            self.model = model.trim().to_string();
        }
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_api_key(self, key: impl Into<String>) -> Self {
        self.with_optional_api_key(Some(key.into()))
    }

    /// Set an optional API key; blank keys count as missing.
    #[must_use]
    pub fn with_optional_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeminiConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model(), "gemini-2.5-flash");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GeminiConfig::new()
            .with_base_url("http://localhost:9999/v1beta")
            .with_model(" gemini-pro ")
            .with_timeout(Duration::from_secs(5))
            .with_api_key("secret");

        assert_eq!(config.base_url, "http://localhost:9999/v1beta");
        assert_eq!(config.model(), "gemini-pro");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = GeminiConfig::new()
            .with_model("   ")
            .with_optional_api_key(Some("  ".to_string()));
        assert_eq!(config.model(), "gemini-2.5-flash");
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", GeminiConfig::new().with_api_key("secret"));
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
