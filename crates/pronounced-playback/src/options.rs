//! Speech options and controller configuration.

use std::time::Duration;

use pronounced_core::{DEFAULT_SPEECH_RATE, Settings, validate_speech_rate};

use crate::error::PlaybackError;

/// Pause after a word before the next utterance.
pub const DEFAULT_WORD_SETTLE: Duration = Duration::from_millis(400);

/// Pause after a sentence before the next word.
pub const DEFAULT_SENTENCE_SETTLE: Duration = Duration::from_millis(600);

/// Rate and mute state applied to every utterance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeechOptions {
    rate: f32,
    muted: bool,
}

impl SpeechOptions {
    /// Validate and build options. `rate` must be finite and within 0.1..=10.
    pub fn new(rate: f32, muted: bool) -> Result<Self, PlaybackError> {
        validate_speech_rate(rate).map_err(|_| PlaybackError::InvalidRate(rate))?;
        Ok(Self { rate, muted })
    }

    /// Options from persisted settings, falling back to defaults for
    /// anything missing or out of range.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.effective_speech_rate(), settings.effective_muted())
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn rate(&self) -> f32 {
        self.rate
    }

    #[must_use]
    pub const fn muted(&self) -> bool {
        self.muted
    }

    /// Utterance volume: 0.0 when muted, otherwise full.
    #[must_use]
    pub const fn volume(&self) -> f32 {
        if self.muted { 0.0 } else { 1.0 }
    }
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            rate: DEFAULT_SPEECH_RATE,
            muted: false,
        }
    }
}

/// Controller timing configuration.
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Pause after each word.
    pub word_settle: Duration,
    /// Pause after each sentence.
    pub sentence_settle: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            word_settle: DEFAULT_WORD_SETTLE,
            sentence_settle: DEFAULT_SENTENCE_SETTLE,
        }
    }
}

impl PlaybackConfig {
    /// Set the pause after each word.
    #[must_use]
    pub const fn with_word_settle(mut self, pause: Duration) -> Self {
        self.word_settle = pause;
        self
    }

    /// Set the pause after each sentence.
    #[must_use]
    pub const fn with_sentence_settle(mut self, pause: Duration) -> Self {
        self.sentence_settle = pause;
        self
    }
}
