//! Authentication provider port.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::User;

/// Source of the currently authenticated identity.
///
/// Sessions are local profiles: signing in with an email creates the profile
/// on first use and makes it current; signing out clears the current session.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The signed-in user, if any.
    async fn current_user(&self) -> Result<Option<User>, RepositoryError>;

    /// Sign in as `email`, creating the profile if needed.
    ///
    /// When `display_name` is given it replaces the stored one.
    async fn sign_in(
        &self,
        email: &str,
        display_name: Option<&str>,
    ) -> Result<User, RepositoryError>;

    /// Clear the current session. Signing out twice is not an error.
    async fn sign_out(&self) -> Result<(), RepositoryError>;
}
