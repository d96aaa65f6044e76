//! Observable playback state.

use pronounced_core::WordId;

/// What the controller is currently speaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NowPlaying {
    /// Nothing is playing.
    #[default]
    Idle,
    /// The text of this word.
    Word(WordId),
    /// The example sentence of this word.
    Sentence(WordId),
}

impl NowPlaying {
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Events emitted by the controller to the presentation layer.
///
/// Delivery is best effort: a dropped receiver never affects playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// A play-all session began over this many items.
    SessionStarted { items: usize },

    /// The "currently playing" state changed.
    NowPlaying(NowPlaying),

    /// A play-all session ended, either exhausted or stopped.
    SessionFinished { cancelled: bool },
}
