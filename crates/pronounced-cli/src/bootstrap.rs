//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Database pool and repositories (via pronounced-db)
//! - Sentence generator (via pronounced-gemini)
//! - Speech backend and playback controller (via pronounced-playback)
//!
//! Command handlers receive the composed `CliContext` and delegate to it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use pronounced_core::{AppCore, SettingsService, SpeechBackend, database_path, env_file_path};
use pronounced_db::{CoreFactory, setup_database};
use pronounced_gemini::{DefaultGeminiClient, GeminiConfig};
use pronounced_playback::{
    PlaybackConfig, PlaybackController, PlaybackEvent, ProcessSpeechBackend, SilentSpeechBackend,
};
use tokio::sync::mpsc::UnboundedReceiver;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Location of the `SQLite` database.
    pub database_path: PathBuf,
    /// Pauses between utterances during play-all.
    pub playback: PlaybackConfig,
}

impl CliConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            database_path: database_path()?,
            playback: PlaybackConfig::default(),
        })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// Pauses used by every playback controller built from this context.
    pub playback: PlaybackConfig,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Build a playback controller over the chosen speech backend.
    pub fn playback_controller(
        &self,
        silent: bool,
    ) -> (PlaybackController, UnboundedReceiver<PlaybackEvent>) {
        PlaybackController::new(speech_backend(silent), self.playback.clone())
    }
}

/// Pick the speech backend: silent when asked, else the first synthesizer on
/// `PATH`, else silent with a notice.
pub fn speech_backend(silent: bool) -> Arc<dyn SpeechBackend> {
    if silent {
        return Arc::new(SilentSpeechBackend::new());
    }
    match ProcessSpeechBackend::detect() {
        Ok(backend) => {
            tracing::debug!(engine = %backend.engine(), "Using speech synthesizer");
            Arc::new(backend)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Falling back to silent playback");
            eprintln!("Note: {e}. Playing silently; install espeak-ng to hear words.");
            Arc::new(SilentSpeechBackend::new())
        }
    }
}

/// Load `.env` from the working directory, then from the data directory.
///
/// Variables already set in the environment win.
pub fn load_env_files() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }
    match env_file_path() {
        Ok(path) if path.exists() => {
            if let Err(e) = dotenvy::from_path(&path) {
                tracing::warn!(path = %path.display(), error = %e, "Could not read .env");
            }
        }
        Ok(_) => {}
        Err(e) => tracing::debug!(error = %e, "No data directory for .env"),
    }
}

/// Bootstrap the CLI application.
///
/// Opens the database, builds the Gemini client from the environment and
/// the saved model setting, and assembles the `AppCore`.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let pool = setup_database(&config.database_path).await?;
    let repos = CoreFactory::build_repos(pool);

    let settings = SettingsService::new(repos.settings.clone()).get().await?;
    let gemini = GeminiConfig::from_env().with_model(settings.effective_sentence_model());
    let generator = Arc::new(DefaultGeminiClient::new(&gemini)?);

    let app = AppCore::new(repos, generator);
    Ok(CliContext {
        app,
        playback: config.playback,
    })
}
