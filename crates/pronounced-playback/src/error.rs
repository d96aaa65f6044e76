//! Playback error types.

/// Errors that can occur when configuring playback.
///
/// Synthesis faults are not errors: the controller logs them and moves on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaybackError {
    /// Speech rate outside the accepted range.
    #[error("Speech rate must be between 0.1 and 10, got {0}")]
    InvalidRate(f32),

    /// No supported speech synthesizer was found on `PATH`.
    #[error("No speech synthesizer found (tried {0})")]
    NoSynthesizer(String),
}
