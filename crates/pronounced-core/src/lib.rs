#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{NewWord, User, Word, WordId, WordUpdate, filter_words, practice_order};
pub use ports::{
    AuthProvider, CompletionCallback, CoreError, Repos, RepositoryError, SentenceError,
    SentenceGeneratorPort, SettingsRepository, SpeechBackend, SpeechOutcome, Utterance,
    WordRepository,
};
pub use services::{AppCore, AuthService, SentenceService, SettingsService, WordService};
pub use settings::{
    DEFAULT_SENTENCE_MODEL, DEFAULT_SPEECH_RATE, MAX_SPEECH_RATE, MIN_SPEECH_RATE,
    SPEECH_RATE_PRESETS, Settings, SettingsError, SettingsUpdate, validate_settings,
    validate_speech_rate,
};

// Re-export path utilities
pub use paths::{
    DATA_DIR_ENV, PathError, ResolvedPaths, data_root, database_path, env_file_path,
    persist_env_value,
};

