//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (the CLI today)
//! receive an `AppCore` instance and use it to access all functionality.

use crate::ports::{Repos, SentenceGeneratorPort};
use std::sync::Arc;

use super::{AuthService, SentenceService, SettingsService, WordService};

/// The core application facade.
///
/// `AppCore` provides access to all core services. It's constructed at the
/// adapter's composition root (bootstrap.rs) with concrete implementations
/// of repositories and the sentence generator.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let generator = Arc::new(GeminiClient::new(config)?);
/// let core = AppCore::new(repos, generator);
///
/// // Access services
/// let words = core.words().list().await?;
/// ```
pub struct AppCore {
    words: WordService,
    auth: AuthService,
    settings: SettingsService,
    sentences: SentenceService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories and sentence generator.
    pub fn new(repos: Repos, generator: Arc<dyn SentenceGeneratorPort>) -> Self {
        Self {
            words: WordService::new(repos.words, repos.auth.clone()),
            auth: AuthService::new(repos.auth),
            settings: SettingsService::new(repos.settings),
            sentences: SentenceService::new(generator),
        }
    }

    /// Access the word service.
    pub const fn words(&self) -> &WordService {
        &self.words
    }

    /// Access the auth service.
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Access the settings service.
    pub const fn settings(&self) -> &SettingsService {
        &self.settings
    }

    /// Access the sentence service.
    pub const fn sentences(&self) -> &SentenceService {
        &self.sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewWord, User, Word, WordId};
    use crate::ports::sentence::MockSentenceGeneratorPort;
    use crate::ports::{AuthProvider, RepositoryError, SettingsRepository, WordRepository};
    use crate::settings::Settings;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct EmptyWordRepo;

    #[async_trait]
    impl WordRepository for EmptyWordRepo {
        async fn list_by_owner(&self, _owner_id: Uuid) -> Result<Vec<Word>, RepositoryError> {
            Ok(vec![])
        }
        async fn get(&self, _owner_id: Uuid, id: WordId) -> Result<Word, RepositoryError> {
            Err(RepositoryError::NotFound(format!("word {id}")))
        }
        async fn insert(&self, _owner_id: Uuid, _word: &NewWord) -> Result<Word, RepositoryError> {
            unimplemented!()
        }
        async fn update(&self, _word: &Word) -> Result<(), RepositoryError> {
            unimplemented!()
        }
        async fn delete(&self, _owner_id: Uuid, id: WordId) -> Result<(), RepositoryError> {
            Err(RepositoryError::NotFound(format!("word {id}")))
        }
    }

    struct SignedOut;

    #[async_trait]
    impl AuthProvider for SignedOut {
        async fn current_user(&self) -> Result<Option<User>, RepositoryError> {
            Ok(None)
        }
        async fn sign_in(&self, _: &str, _: Option<&str>) -> Result<User, RepositoryError> {
            unimplemented!()
        }
        async fn sign_out(&self) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    struct MockSettingsRepo(Mutex<Settings>);

    #[async_trait]
    impl SettingsRepository for MockSettingsRepo {
        async fn load(&self) -> Result<Settings, RepositoryError> {
            Ok(self.0.lock().unwrap().clone())
        }
        async fn save(&self, settings: &Settings) -> Result<(), RepositoryError> {
            *self.0.lock().unwrap() = settings.clone();
            Ok(())
        }
    }

    fn core() -> AppCore {
        let repos = Repos::new(
            Arc::new(EmptyWordRepo),
            Arc::new(SignedOut),
            Arc::new(MockSettingsRepo(Mutex::new(Settings::with_defaults()))),
        );
        AppCore::new(repos, Arc::new(MockSentenceGeneratorPort::new()))
    }

    #[tokio::test]
    async fn test_app_core_wires_services() {
        let core = core();
        assert!(core.auth().current_user().await.unwrap().is_none());
        assert!(core.settings().get().await.is_ok());
    }

    #[tokio::test]
    async fn test_words_are_gated_on_auth() {
        let core = core();
        assert!(matches!(
            core.words().list().await,
            Err(crate::ports::CoreError::Unauthenticated)
        ));
    }
}
