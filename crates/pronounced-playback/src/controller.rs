//! Playback controller - ordered, cancellable speech over a list of words.
//!
//! A *run* is either a play-all session or a single-item play. At most one
//! run exists at a time; starting a new one first cancels the old one and
//! silences the backend.
//!
//! ```text
//!   Idle ──start_all──▶ Session ──exhausted / stop_all──▶ Idle
//!   Idle ──play_word / play_sentence──▶ Single ──done / toggle──▶ Idle
//! ```
//!
//! Each run carries a generation number and a [`CancelFlag`]. A run only
//! clears shared state while it is still the current generation, so a
//! superseded loop winding down can never reset the state of its successor.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pronounced_core::{SpeechBackend, SpeechOutcome, Utterance, Word, WordId};
use tokio::sync::mpsc;

use crate::events::{NowPlaying, PlaybackEvent};
use crate::options::{PlaybackConfig, SpeechOptions};
use crate::signal::{CancelFlag, completion_pair};

// ── Run bookkeeping ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Session,
    Single,
}

#[derive(Debug)]
struct Run {
    generation: u64,
    kind: RunKind,
    cancel: CancelFlag,
}

#[derive(Debug, Default)]
struct State {
    next_generation: u64,
    run: Option<Run>,
    now_playing: NowPlaying,
    options: SpeechOptions,
}

impl State {
    fn begin(&mut self, kind: RunKind) -> (u64, CancelFlag) {
        self.next_generation += 1;
        let generation = self.next_generation;
        let cancel = CancelFlag::new();
        self.run = Some(Run {
            generation,
            kind,
            cancel: cancel.clone(),
        });
        (generation, cancel)
    }

    fn is_current(&self, generation: u64) -> bool {
        self.run.as_ref().is_some_and(|r| r.generation == generation)
    }
}

struct Inner {
    backend: Arc<dyn SpeechBackend>,
    config: PlaybackConfig,
    state: Mutex<State>,
    events: mpsc::UnboundedSender<PlaybackEvent>,
}

// ── Controller ─────────────────────────────────────────────────────

/// Plays words and their example sentences through a [`SpeechBackend`].
///
/// Cheap to clone; clones share the same state, so one clone can
/// `stop_all` a session another clone is awaiting.
#[derive(Clone)]
pub struct PlaybackController {
    inner: Arc<Inner>,
}

impl PlaybackController {
    /// Create a new controller.
    ///
    /// Returns the controller and a receiver for [`PlaybackEvent`]s.
    #[must_use]
    pub fn new(
        backend: Arc<dyn SpeechBackend>,
        config: PlaybackConfig,
    ) -> (Self, mpsc::UnboundedReceiver<PlaybackEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let controller = Self {
            inner: Arc::new(Inner {
                backend,
                config,
                state: Mutex::new(State::default()),
                events,
            }),
        };
        (controller, rx)
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: PlaybackEvent) {
        let _ = self.inner.events.send(event);
    }

    /// Whether a play-all session is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state()
            .run
            .as_ref()
            .is_some_and(|r| r.kind == RunKind::Session)
    }

    /// What is being spoken right now.
    #[must_use]
    pub fn now_playing(&self) -> NowPlaying {
        self.state().now_playing
    }

    /// Rate and mute state used for the next utterance.
    #[must_use]
    pub fn options(&self) -> SpeechOptions {
        self.state().options
    }

    /// Change rate and mute state for subsequent utterances.
    pub fn set_options(&self, options: SpeechOptions) {
        self.state().options = options;
    }

    // ── Play all ───────────────────────────────────────────────────

    /// Speak every word in order, each followed by its sentence if present.
    ///
    /// Returns when the session is exhausted or stopped. An empty list is a
    /// no-op and leaves any running playback alone.
    pub async fn start_all(&self, items: Vec<Word>, options: SpeechOptions) {
        if items.is_empty() {
            return;
        }

        let (generation, cancel, previous) = {
            let mut state = self.state();
            let previous = self.take_run(&mut state);
            state.options = options;
            let (generation, cancel) = state.begin(RunKind::Session);
            (generation, cancel, previous)
        };
        if previous {
            self.inner.backend.cancel_all();
        }

        tracing::info!(
            items = items.len(),
            rate = options.rate(),
            muted = options.muted(),
            "Starting playback session"
        );
        self.emit(PlaybackEvent::SessionStarted { items: items.len() });

        let config = &self.inner.config;
        for word in &items {
            if cancel.is_cancelled() {
                break;
            }
            self.speak(generation, NowPlaying::Word(word.id), &word.text)
                .await;
            if cancel.is_cancelled() {
                break;
            }
            tokio::time::sleep(config.word_settle).await;

            let Some(sentence) = word.speakable_sentence() else {
                continue;
            };
            if cancel.is_cancelled() {
                break;
            }
            self.speak(generation, NowPlaying::Sentence(word.id), sentence)
                .await;
            if cancel.is_cancelled() {
                break;
            }
            tokio::time::sleep(config.sentence_settle).await;
        }

        self.finish(generation, RunKind::Session);
    }

    /// Stop whatever is playing.
    ///
    /// Silences the backend once and marks the run cancelled; the loop exits
    /// at its next checkpoint. A no-op when nothing is playing.
    pub fn stop_all(&self) {
        let stopped = {
            let mut state = self.state();
            self.take_run(&mut state)
        };
        if stopped {
            tracing::info!("Playback stopped");
            self.inner.backend.cancel_all();
        }
    }

    // ── Single-item play ───────────────────────────────────────────

    /// Speak one word's text.
    ///
    /// If that word's text is already playing this stops playback instead.
    pub async fn play_word(&self, word: &Word) {
        self.play_single(NowPlaying::Word(word.id), &word.text)
            .await;
    }

    /// Speak one word's example sentence.
    ///
    /// A no-op for words without a sentence. If that sentence is already
    /// playing this stops playback instead.
    pub async fn play_sentence(&self, word: &Word) {
        let Some(sentence) = word.speakable_sentence() else {
            return;
        };
        self.play_single(NowPlaying::Sentence(word.id), sentence)
            .await;
    }

    async fn play_single(&self, target: NowPlaying, text: &str) {
        let started = {
            let mut state = self.state();
            if state.run.is_some() && state.now_playing == target {
                None
            } else {
                let previous = self.take_run(&mut state);
                let (generation, _) = state.begin(RunKind::Single);
                Some((generation, previous))
            }
        };
        let Some((generation, previous)) = started else {
            self.stop_all();
            return;
        };
        if previous {
            self.inner.backend.cancel_all();
        }

        self.speak(generation, target, text).await;
        self.finish(generation, RunKind::Single);
    }

    // ── Internals ──────────────────────────────────────────────────

    /// Cancel and remove the current run, if any. Returns whether there was one.
    ///
    /// Emits the events for the run ending; the caller silences the backend
    /// after releasing the lock.
    fn take_run(&self, state: &mut State) -> bool {
        let Some(run) = state.run.take() else {
            return false;
        };
        run.cancel.cancel();
        if !state.now_playing.is_idle() {
            state.now_playing = NowPlaying::Idle;
            self.emit(PlaybackEvent::NowPlaying(NowPlaying::Idle));
        }
        if run.kind == RunKind::Session {
            self.emit(PlaybackEvent::SessionFinished { cancelled: true });
        }
        true
    }

    /// Speak `text` and wait for the backend to report completion.
    ///
    /// Failures are logged and otherwise treated as completion.
    async fn speak(&self, generation: u64, target: NowPlaying, text: &str) {
        let options = {
            let mut state = self.state();
            if !state.is_current(generation) {
                return;
            }
            state.now_playing = target;
            state.options
        };
        self.emit(PlaybackEvent::NowPlaying(target));

        tracing::debug!(?target, text, "Speaking");
        let (on_done, completion) = completion_pair();
        self.inner.backend.speak(
            Utterance::new(text, options.rate(), options.volume()),
            on_done,
        );

        match completion.await {
            SpeechOutcome::Finished | SpeechOutcome::Interrupted => {}
            SpeechOutcome::Failed(reason) => {
                tracing::warn!(
                    backend = self.inner.backend.name(),
                    %reason,
                    "Speech synthesis failed, continuing"
                );
            }
        }
    }

    /// Return to idle if `generation` is still the current run.
    fn finish(&self, generation: u64, kind: RunKind) {
        let mut state = self.state();
        if !state.is_current(generation) {
            return;
        }
        state.run = None;
        let was_playing = !state.now_playing.is_idle();
        state.now_playing = NowPlaying::Idle;
        drop(state);

        if was_playing {
            self.emit(PlaybackEvent::NowPlaying(NowPlaying::Idle));
        }
        if kind == RunKind::Session {
            tracing::info!("Playback session finished");
            self.emit(PlaybackEvent::SessionFinished { cancelled: false });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    /// Completes every utterance immediately.
    #[derive(Default)]
    struct InstantBackend {
        spoken: Mutex<Vec<Utterance>>,
        cancels: AtomicUsize,
    }

    impl SpeechBackend for InstantBackend {
        fn speak(&self, utterance: Utterance, on_done: pronounced_core::CompletionCallback) {
            self.spoken.lock().unwrap().push(utterance);
            on_done(SpeechOutcome::Finished);
        }

        fn cancel_all(&self) {
            self.cancels.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn word(text: &str, sentence: Option<&str>) -> Word {
        Word {
            id: Uuid::new_v4(),
            text: text.into(),
            sentence: sentence.map(Into::into),
            is_favorite: false,
            owner_id: Uuid::nil(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_options_are_applied_to_utterances() {
        let backend = Arc::new(InstantBackend::default());
        let (controller, _rx) = PlaybackController::new(backend.clone(), PlaybackConfig::default());

        let options = SpeechOptions::new(1.5, true).unwrap();
        controller
            .start_all(vec![word("cat", Some("The cat sleeps."))], options)
            .await;

        let spoken = backend.spoken.lock().unwrap();
        assert_eq!(spoken.len(), 2);
        assert!(spoken.iter().all(|u| (u.rate - 1.5).abs() < f32::EPSILON));
        assert!(spoken.iter().all(|u| u.volume == 0.0));
        assert_eq!(controller.options(), options);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_sentence_is_skipped() {
        let backend = Arc::new(InstantBackend::default());
        let (controller, _rx) = PlaybackController::new(backend.clone(), PlaybackConfig::default());

        controller
            .start_all(vec![word("cat", Some("   "))], SpeechOptions::default())
            .await;

        assert_eq!(backend.spoken.lock().unwrap().len(), 1);
        assert!(!controller.is_active());
    }

    #[tokio::test]
    async fn test_play_sentence_without_sentence_is_noop() {
        let backend = Arc::new(InstantBackend::default());
        let (controller, _rx) = PlaybackController::new(backend.clone(), PlaybackConfig::default());

        controller.play_sentence(&word("cat", None)).await;

        assert!(backend.spoken.lock().unwrap().is_empty());
        assert_eq!(backend.cancels.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_single_play_returns_to_idle() {
        let backend = Arc::new(InstantBackend::default());
        let (controller, mut rx) = PlaybackController::new(backend.clone(), PlaybackConfig::default());
        let w = word("cat", Some("The cat sleeps."));

        controller.play_sentence(&w).await;

        assert_eq!(backend.spoken.lock().unwrap()[0].text, "The cat sleeps.");
        assert_eq!(controller.now_playing(), NowPlaying::Idle);
        assert!(!controller.is_active());
        assert_eq!(
            rx.try_recv().unwrap(),
            PlaybackEvent::NowPlaying(NowPlaying::Sentence(w.id))
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            PlaybackEvent::NowPlaying(NowPlaying::Idle)
        );
    }

    #[test]
    fn test_stop_all_when_idle_does_not_touch_backend() {
        let backend = Arc::new(InstantBackend::default());
        let (controller, _rx) = PlaybackController::new(backend.clone(), PlaybackConfig::default());

        controller.stop_all();

        assert_eq!(backend.cancels.load(Ordering::SeqCst), 0);
    }
}
