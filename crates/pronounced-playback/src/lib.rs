#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod backend;
pub mod controller;
pub mod error;
pub mod events;
pub mod options;
pub mod signal;

// Re-export key types for convenience
pub use backend::{ProcessSpeechBackend, SilentSpeechBackend, SynthEngine};
pub use controller::PlaybackController;
pub use error::PlaybackError;
pub use events::{NowPlaying, PlaybackEvent};
pub use options::{PlaybackConfig, SpeechOptions};

#[cfg(test)]
use chrono as _;
#[cfg(test)]
use uuid as _;
