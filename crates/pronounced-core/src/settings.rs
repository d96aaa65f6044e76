//! Settings domain types and validation.
//!
//! This module contains the persisted speech and generation settings.
//! These are pure domain types with no infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Normal speaking speed.
pub const DEFAULT_SPEECH_RATE: f32 = 1.0;

/// Model used for sentence generation when none is configured.
pub const DEFAULT_SENTENCE_MODEL: &str = "gemini-2.5-flash";

/// Slowest accepted speech rate.
pub const MIN_SPEECH_RATE: f32 = 0.1;

/// Fastest accepted speech rate.
pub const MAX_SPEECH_RATE: f32 = 10.0;

/// Rates offered as shortcuts. Any rate within range is accepted.
pub const SPEECH_RATE_PRESETS: [f32; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

/// Application settings structure.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Speech rate multiplier applied to every utterance.
    pub speech_rate: Option<f32>,

    /// Whether speech is muted (utterances still run at volume 0).
    pub muted: Option<bool>,

    /// Gemini model used for sentence generation.
    pub sentence_model: Option<String>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            speech_rate: Some(DEFAULT_SPEECH_RATE),
            muted: Some(false),
            sentence_model: Some(DEFAULT_SENTENCE_MODEL.to_string()),
        }
    }

    /// Get the effective speech rate (with default fallback).
    #[must_use]
    pub fn effective_speech_rate(&self) -> f32 {
        self.speech_rate.unwrap_or(DEFAULT_SPEECH_RATE)
    }

    /// Get the effective mute flag (with default fallback).
    #[must_use]
    pub fn effective_muted(&self) -> bool {
        self.muted.unwrap_or(false)
    }

    /// Get the effective sentence model (with default fallback).
    #[must_use]
    pub fn effective_sentence_model(&self) -> &str {
        self.sentence_model
            .as_deref()
            .unwrap_or(DEFAULT_SENTENCE_MODEL)
    }

    /// Merge another settings into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(rate) = other.speech_rate {
            self.speech_rate = rate;
        }
        if let Some(muted) = other.muted {
            self.muted = muted;
        }
        if let Some(ref model) = other.sentence_model {
            self.sentence_model.clone_from(model);
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = reset field to its default
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub speech_rate: Option<Option<f32>>,
    pub muted: Option<Option<bool>>,
    pub sentence_model: Option<Option<String>>,
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Speech rate must be between 0.1 and 10, got {0}")]
    InvalidSpeechRate(f32),

    #[error("Sentence model cannot be empty")]
    EmptySentenceModel,
}

/// Check a single speech rate against the accepted range.
pub fn validate_speech_rate(rate: f32) -> Result<(), SettingsError> {
    if rate.is_finite() && (MIN_SPEECH_RATE..=MAX_SPEECH_RATE).contains(&rate) {
        Ok(())
    } else {
        Err(SettingsError::InvalidSpeechRate(rate))
    }
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(rate) = settings.speech_rate {
        validate_speech_rate(rate)?;
    }

    if settings
        .sentence_model
        .as_ref()
        .is_some_and(|m| m.trim().is_empty())
    {
        return Err(SettingsError::EmptySentenceModel);
    }

    Ok(())
}
