//! `SQLite` implementation of the `AuthProvider` trait.
//!
//! Profiles live in `users`; the signed-in profile is the single row of
//! `auth_session`, so a session survives between CLI invocations.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use pronounced_core::{AuthProvider, RepositoryError, User};

use super::row_mappers::{USER_SELECT_COLUMNS, format_timestamp, row_to_user, storage_error};

/// Local-profile authentication backed by `SQLite`.
pub struct SqliteAuthProvider {
    pool: SqlitePool,
}

impl SqliteAuthProvider {
    /// Create a new `SQLite` auth provider.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthProvider for SqliteAuthProvider {
    async fn current_user(&self) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query(
            "SELECT u.id, u.email, u.display_name, u.created_at \
             FROM auth_session s JOIN users u ON u.id = s.user_id \
             WHERE s.id = 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn sign_in(
        &self,
        email: &str,
        display_name: Option<&str>,
    ) -> Result<User, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;
        let now = format_timestamp(Utc::now());

        let sql = format!("SELECT {USER_SELECT_COLUMNS} FROM users WHERE email = ?");
        let existing = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&mut *tx)
            .await
            .map_err(storage_error)?;

        let user_id = match existing {
            Some(row) => {
                let user = row_to_user(&row)?;
                if let Some(name) = display_name {
                    sqlx::query("UPDATE users SET display_name = ? WHERE id = ?")
                        .bind(name)
                        .bind(user.id.to_string())
                        .execute(&mut *tx)
                        .await
                        .map_err(storage_error)?;
                }
                user.id
            }
            None => {
                let id = Uuid::new_v4();
                sqlx::query(
                    "INSERT INTO users (id, email, display_name, created_at) VALUES (?, ?, ?, ?)",
                )
                .bind(id.to_string())
                .bind(email)
                .bind(display_name)
                .bind(&now)
                .execute(&mut *tx)
                .await
                .map_err(storage_error)?;
                tracing::info!(%email, "Created local profile");
                id
            }
        };

        sqlx::query(
            "INSERT OR REPLACE INTO auth_session (id, user_id, signed_in_at) VALUES (1, ?, ?)",
        )
        .bind(user_id.to_string())
        .bind(&now)
        .execute(&mut *tx)
        .await
        .map_err(storage_error)?;

        tx.commit().await.map_err(storage_error)?;

        self.current_user()
            .await?
            .ok_or_else(|| RepositoryError::Storage("session was not persisted".into()))
    }

    async fn sign_out(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM auth_session")
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    async fn provider() -> SqliteAuthProvider {
        SqliteAuthProvider::new(setup_test_database().await.unwrap())
    }

    #[tokio::test]
    async fn test_no_session_by_default() {
        let auth = provider().await;
        assert!(auth.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_creates_profile_and_session() {
        let auth = provider().await;
        let user = auth
            .sign_in("learner@example.com", Some("Learner"))
            .await
            .unwrap();
        assert_eq!(user.email, "learner@example.com");
        assert_eq!(user.display_name.as_deref(), Some("Learner"));
        assert_eq!(auth.current_user().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_sign_in_again_reuses_profile() {
        let auth = provider().await;
        let first = auth.sign_in("learner@example.com", None).await.unwrap();
        auth.sign_out().await.unwrap();

        let second = auth
            .sign_in("LEARNER@example.com", Some("Renamed"))
            .await
            .unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(second.display_name.as_deref(), Some("Renamed"));

        // Omitting the name keeps the stored one.
        let third = auth.sign_in("learner@example.com", None).await.unwrap();
        assert_eq!(third.display_name.as_deref(), Some("Renamed"));
    }

    #[tokio::test]
    async fn test_switching_profiles_replaces_session() {
        let auth = provider().await;
        auth.sign_in("a@example.com", None).await.unwrap();
        let b = auth.sign_in("b@example.com", None).await.unwrap();
        assert_eq!(auth.current_user().await.unwrap().map(|u| u.id), Some(b.id));
    }

    #[tokio::test]
    async fn test_sign_out_is_idempotent() {
        let auth = provider().await;
        auth.sign_in("learner@example.com", None).await.unwrap();
        auth.sign_out().await.unwrap();
        auth.sign_out().await.unwrap();
        assert!(auth.current_user().await.unwrap().is_none());
    }
}
