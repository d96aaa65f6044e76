//! Callback-to-future conversion and cooperative cancellation.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::task::{Context, Poll};

use pronounced_core::{CompletionCallback, SpeechOutcome};
use tokio::sync::oneshot;

/// Create a completion callback and the future it resolves.
///
/// The future resolves exactly once: with the outcome passed to the callback,
/// or with [`SpeechOutcome::Interrupted`] if the callback is dropped unused.
#[must_use]
pub fn completion_pair() -> (CompletionCallback, Completion) {
    let (tx, rx) = oneshot::channel();
    let callback: CompletionCallback = Box::new(move |outcome| {
        let _ = tx.send(outcome);
    });
    (callback, Completion { rx })
}

/// Resolves when an utterance ends.
#[derive(Debug)]
pub struct Completion {
    rx: oneshot::Receiver<SpeechOutcome>,
}

impl Future for Completion {
    type Output = SpeechOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|res| res.unwrap_or(SpeechOutcome::Interrupted))
    }
}

/// Shared cancellation flag for one playback run.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_pending_until_callback() {
        let (done, completion) = completion_pair();
        let mut completion = tokio_test::task::spawn(completion);
        tokio_test::assert_pending!(completion.poll());

        done(SpeechOutcome::Finished);
        assert!(completion.is_woken());
        tokio_test::assert_ready_eq!(completion.poll(), SpeechOutcome::Finished);
    }

    #[tokio::test]
    async fn test_callback_resolves_completion() {
        let (done, completion) = completion_pair();
        done(SpeechOutcome::Failed("boom".into()));
        assert_eq!(completion.await, SpeechOutcome::Failed("boom".into()));
    }

    #[tokio::test]
    async fn test_dropped_callback_counts_as_interrupted() {
        let (done, completion) = completion_pair();
        drop(done);
        assert_eq!(completion.await, SpeechOutcome::Interrupted);
    }

    #[tokio::test]
    async fn test_callback_from_another_task() {
        let (done, completion) = completion_pair();
        tokio::spawn(async move { done(SpeechOutcome::Finished) });
        assert_eq!(completion.await, SpeechOutcome::Finished);
    }

    #[test]
    fn test_cancel_flag_is_shared() {
        let flag = CancelFlag::new();
        let seen_by_loop = flag.clone();
        assert!(!seen_by_loop.is_cancelled());
        flag.cancel();
        flag.cancel();
        assert!(seen_by_loop.is_cancelled());
    }
}
