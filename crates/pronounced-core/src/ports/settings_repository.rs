//! Persistence port for [`Settings`].

use async_trait::async_trait;

use super::RepositoryError;
use crate::settings::Settings;

/// Loads and stores the settings document as a whole.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// The stored settings, or [`Settings::with_defaults`] when nothing is stored yet.
    async fn load(&self) -> Result<Settings, RepositoryError>;

    async fn save(&self, settings: &Settings) -> Result<(), RepositoryError>;
}
