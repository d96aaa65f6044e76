//! Speech backend implementations.
//!
//! Both backends implement [`SpeechBackend`](pronounced_core::SpeechBackend)
//! and keep at most one utterance in flight: speaking again interrupts the
//! previous utterance, and `cancel_all` interrupts the current one.
//!
//! | Backend | Output |
//! |---|---|
//! | [`ProcessSpeechBackend`] | `espeak-ng`, `espeak` or macOS `say` child process |
//! | [`SilentSpeechBackend`] | none; sleeps for an estimated speaking time |

mod process;
mod silent;

pub use process::{ProcessSpeechBackend, SynthEngine};
pub use silent::SilentSpeechBackend;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use tokio::sync::oneshot;

// ── In-flight utterance tracking ───────────────────────────────────

/// Tracks the single in-flight utterance of a backend.
#[derive(Debug, Default)]
struct InFlight {
    next_id: AtomicU64,
    current: Mutex<Option<(u64, oneshot::Sender<()>)>>,
}

impl InFlight {
    /// Register a new utterance, interrupting the previous one.
    ///
    /// The returned receiver resolves when the utterance should stop.
    fn begin(&self) -> (u64, oneshot::Receiver<()>) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let (tx, rx) = oneshot::channel();
        let previous = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace((id, tx));
        if let Some((_, stop)) = previous {
            let _ = stop.send(());
        }
        (id, rx)
    }

    /// Forget utterance `id` if it is still the current one.
    fn finish(&self, id: u64) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if current.as_ref().is_some_and(|(cur, _)| *cur == id) {
            *current = None;
        }
    }

    /// Interrupt the current utterance, if any.
    fn cancel(&self) {
        let current = self
            .current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some((_, stop)) = current {
            let _ = stop.send(());
        }
    }
}
