//! Read and change playback and generation settings.

use std::sync::Arc;

use crate::ports::{CoreError, SettingsRepository};
use crate::settings::{Settings, SettingsUpdate, validate_settings};

/// Settings access with validation on every write.
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(&self) -> Result<Settings, CoreError> {
        Ok(self.repo.load().await?)
    }

    /// Merge `update` into the stored settings and return the result.
    ///
    /// Nothing is written when the merged settings fail validation.
    pub async fn update(&self, update: SettingsUpdate) -> Result<Settings, CoreError> {
        let mut merged = self.repo.load().await?;
        merged.merge(&update);
        self.save(&merged).await?;
        Ok(merged)
    }

    /// Replace the stored settings.
    pub async fn save(&self, settings: &Settings) -> Result<(), CoreError> {
        validate_settings(settings)?;
        self.repo.save(settings).await?;
        tracing::debug!(?settings, "Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RepositoryError;
    use crate::ports::settings_repository::MockSettingsRepository;

    fn loading_defaults() -> MockSettingsRepository {
        let mut repo = MockSettingsRepository::new();
        repo.expect_load()
            .returning(|| Ok(Settings::with_defaults()));
        repo
    }

    #[tokio::test]
    async fn test_update_merges_and_saves() {
        let mut repo = loading_defaults();
        repo.expect_save()
            .withf(|s| s.speech_rate == Some(0.75) && s.muted == Some(true))
            .times(1)
            .returning(|_| Ok(()));
        let service = SettingsService::new(Arc::new(repo));

        let update = SettingsUpdate {
            speech_rate: Some(Some(0.75)),
            muted: Some(Some(true)),
            ..Default::default()
        };
        let updated = service.update(update).await.unwrap();
        assert_eq!(updated.speech_rate, Some(0.75));
        assert_eq!(
            updated.effective_sentence_model(),
            Settings::with_defaults().effective_sentence_model()
        );
    }

    #[tokio::test]
    async fn test_invalid_update_is_not_saved() {
        let mut repo = loading_defaults();
        repo.expect_save().never();
        let service = SettingsService::new(Arc::new(repo));

        let update = SettingsUpdate {
            speech_rate: Some(Some(42.0)),
            ..Default::default()
        };
        assert!(matches!(
            service.update(update).await,
            Err(CoreError::Settings(_))
        ));
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces() {
        let mut repo = MockSettingsRepository::new();
        repo.expect_load()
            .returning(|| Err(RepositoryError::Storage("disk full".into())));
        let service = SettingsService::new(Arc::new(repo));

        assert!(matches!(
            service.get().await,
            Err(CoreError::Repository(RepositoryError::Storage(_)))
        ));
    }
}
