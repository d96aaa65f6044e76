//! Silent backend that simulates speaking time.

use std::sync::Arc;
use std::time::Duration;

use pronounced_core::{CompletionCallback, SpeechBackend, SpeechOutcome, Utterance};
use tokio::runtime::Handle;

use super::InFlight;

/// Fixed overhead per utterance.
const BASE_DURATION: Duration = Duration::from_millis(250);

/// Speaking time per character at rate 1.0, in milliseconds.
const PER_CHAR_MS: f64 = 60.0;

/// Backend that produces no audio.
///
/// Each utterance "plays" for a duration estimated from its length and rate,
/// which keeps pacing realistic when no synthesizer is installed.
#[derive(Debug, Default, Clone)]
pub struct SilentSpeechBackend {
    in_flight: Arc<InFlight>,
}

impl SilentSpeechBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimated speaking time for `utterance`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn estimate(utterance: &Utterance) -> Duration {
        let chars = utterance.text.chars().count() as f64;
        let rate = if utterance.rate.is_finite() && utterance.rate > 0.0 {
            f64::from(utterance.rate)
        } else {
            1.0
        };
        let speaking = (PER_CHAR_MS * chars / rate).round() as u64;
        BASE_DURATION + Duration::from_millis(speaking)
    }
}

impl SpeechBackend for SilentSpeechBackend {
    fn speak(&self, utterance: Utterance, on_done: CompletionCallback) {
        let Ok(handle) = Handle::try_current() else {
            on_done(SpeechOutcome::Failed("no async runtime".into()));
            return;
        };

        let duration = Self::estimate(&utterance);
        let (id, stop) = self.in_flight.begin();
        let in_flight = Arc::clone(&self.in_flight);
        handle.spawn(async move {
            let outcome = tokio::select! {
                () = tokio::time::sleep(duration) => SpeechOutcome::Finished,
                _ = stop => SpeechOutcome::Interrupted,
            };
            in_flight.finish(id);
            on_done(outcome);
        });
    }

    fn cancel_all(&self) {
        self.in_flight.cancel();
    }

    fn name(&self) -> &'static str {
        "silent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::completion_pair;

    #[test]
    fn test_estimate_scales_with_rate() {
        let normal = SilentSpeechBackend::estimate(&Utterance::new("hello", 1.0, 1.0));
        let fast = SilentSpeechBackend::estimate(&Utterance::new("hello", 2.0, 1.0));
        assert_eq!(normal, Duration::from_millis(550));
        assert_eq!(fast, Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn test_utterance_finishes() {
        let backend = SilentSpeechBackend::new();
        let (done, completion) = completion_pair();
        backend.speak(Utterance::new("cat", 1.0, 1.0), done);
        assert_eq!(completion.await, SpeechOutcome::Finished);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_interrupts() {
        let backend = SilentSpeechBackend::new();
        let (done, completion) = completion_pair();
        backend.speak(Utterance::new("a long sentence", 1.0, 1.0), done);
        backend.cancel_all();
        assert_eq!(completion.await, SpeechOutcome::Interrupted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_utterance_interrupts_previous() {
        let backend = SilentSpeechBackend::new();
        let (first_done, first) = completion_pair();
        let (second_done, second) = completion_pair();
        backend.speak(Utterance::new("first", 1.0, 1.0), first_done);
        backend.speak(Utterance::new("second", 1.0, 1.0), second_done);
        assert_eq!(first.await, SpeechOutcome::Interrupted);
        assert_eq!(second.await, SpeechOutcome::Finished);
    }

    #[test]
    fn test_speak_without_runtime_fails() {
        let backend = SilentSpeechBackend::new();
        let outcome = std::sync::Arc::new(std::sync::Mutex::new(None));
        let seen = outcome.clone();
        backend.speak(
            Utterance::new("cat", 1.0, 1.0),
            Box::new(move |o| *seen.lock().unwrap() = Some(o)),
        );
        assert!(matches!(
            outcome.lock().unwrap().take(),
            Some(SpeechOutcome::Failed(_))
        ));
    }
}
