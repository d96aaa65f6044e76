//! Speech backend port.
//!
//! A speech backend is a process-wide synthesizer: at most one utterance is
//! audible at a time, and starting a new utterance silences the previous one.
//! Completion is reported through a one-shot callback so that backends built
//! on event APIs fit without an async runtime of their own.

/// One text-to-speech request.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// Speed multiplier, 1.0 is normal.
    pub rate: f32,
    /// 0.0 (silent) to 1.0 (full).
    pub volume: f32,
}

impl Utterance {
    pub fn new(text: impl Into<String>, rate: f32, volume: f32) -> Self {
        Self {
            text: text.into(),
            rate,
            volume,
        }
    }
}

/// How an utterance ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechOutcome {
    /// Spoken to the end.
    Finished,
    /// Silenced by `cancel_all` or by a newer utterance.
    Interrupted,
    /// The synthesizer reported an error.
    Failed(String),
}

/// Called exactly once when an utterance ends.
///
/// A backend may also drop the callback without calling it (for example when
/// the utterance is discarded on cancel); callers treat that as completion.
pub type CompletionCallback = Box<dyn FnOnce(SpeechOutcome) + Send>;

/// Platform text-to-speech capability.
pub trait SpeechBackend: Send + Sync {
    /// Start speaking `utterance`, silencing anything already audible.
    ///
    /// Returns immediately; `on_done` fires when the utterance ends.
    fn speak(&self, utterance: Utterance, on_done: CompletionCallback);

    /// Silence any in-flight utterance immediately.
    fn cancel_all(&self);

    /// Short name for logs.
    fn name(&self) -> &'static str {
        "speech"
    }
}
