//! Auth service - sign in, sign out, and identity checks.

use std::sync::Arc;

use crate::domain::User;
use crate::ports::{AuthProvider, CoreError};

/// Service wrapping the [`AuthProvider`] port.
pub struct AuthService {
    provider: Arc<dyn AuthProvider>,
}

impl AuthService {
    /// Create a new auth service.
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }

    /// The signed-in user, if any.
    pub async fn current_user(&self) -> Result<Option<User>, CoreError> {
        Ok(self.provider.current_user().await?)
    }

    /// The signed-in user, or `CoreError::Unauthenticated`.
    pub async fn require_user(&self) -> Result<User, CoreError> {
        self.current_user().await?.ok_or(CoreError::Unauthenticated)
    }

    /// Sign in with an email address and optional display name.
    pub async fn sign_in(
        &self,
        email: &str,
        display_name: Option<&str>,
    ) -> Result<User, CoreError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(CoreError::Validation(format!(
                "'{email}' is not a valid email address"
            )));
        }
        let display_name = display_name.map(str::trim).filter(|n| !n.is_empty());
        let user = self.provider.sign_in(email, display_name).await?;
        tracing::info!(user = %user.email, "Signed in");
        Ok(user)
    }

    /// Sign out. A no-op when nobody is signed in.
    pub async fn sign_out(&self) -> Result<(), CoreError> {
        self.provider.sign_out().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RepositoryError;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct MemoryAuth {
        current: Mutex<Option<User>>,
    }

    #[async_trait]
    impl AuthProvider for MemoryAuth {
        async fn current_user(&self) -> Result<Option<User>, RepositoryError> {
            Ok(self.current.lock().unwrap().clone())
        }

        async fn sign_in(
            &self,
            email: &str,
            display_name: Option<&str>,
        ) -> Result<User, RepositoryError> {
            let user = User {
                id: Uuid::new_v4(),
                email: email.to_string(),
                display_name: display_name.map(ToString::to_string),
                created_at: Utc::now(),
            };
            *self.current.lock().unwrap() = Some(user.clone());
            Ok(user)
        }

        async fn sign_out(&self) -> Result<(), RepositoryError> {
            *self.current.lock().unwrap() = None;
            Ok(())
        }
    }

    fn service() -> AuthService {
        AuthService::new(Arc::new(MemoryAuth {
            current: Mutex::new(None),
        }))
    }

    #[tokio::test]
    async fn test_require_user_when_signed_out() {
        let service = service();
        assert!(matches!(
            service.require_user().await,
            Err(CoreError::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn test_sign_in_validates_email() {
        let service = service();
        assert!(matches!(
            service.sign_in("not-an-email", None).await,
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            service.sign_in("   ", None).await,
            Err(CoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_sign_in_then_out() {
        let service = service();
        let user = service
            .sign_in(" learner@example.com ", Some("  "))
            .await
            .unwrap();
        assert_eq!(user.email, "learner@example.com");
        assert_eq!(user.display_name, None);
        assert_eq!(service.require_user().await.unwrap().id, user.id);

        service.sign_out().await.unwrap();
        service.sign_out().await.unwrap();
        assert!(service.current_user().await.unwrap().is_none());
    }
}
