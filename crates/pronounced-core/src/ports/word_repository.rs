//! Word repository trait definition.
//!
//! This port defines the interface for word persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::{NewWord, Word, WordId};

/// Repository for word persistence operations.
///
/// Every operation is scoped to an owner: a word belonging to another user
/// behaves exactly like a missing one.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: list, get, insert, update, delete
/// - Ordering for practice and search belong in `WordService`, not here
#[async_trait]
pub trait WordRepository: Send + Sync {
    /// List all of the owner's words, most recently created first.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Word>, RepositoryError>;

    /// Get one of the owner's words.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the word doesn't exist.
    async fn get(&self, owner_id: Uuid, id: WordId) -> Result<Word, RepositoryError>;

    /// Insert a new word for the owner.
    ///
    /// Returns the persisted word with its assigned ID and timestamps.
    async fn insert(&self, owner_id: Uuid, word: &NewWord) -> Result<Word, RepositoryError>;

    /// Persist changes to an existing word.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the word doesn't exist.
    async fn update(&self, word: &Word) -> Result<(), RepositoryError>;

    /// Delete one of the owner's words.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the word doesn't exist.
    async fn delete(&self, owner_id: Uuid, id: WordId) -> Result<(), RepositoryError>;
}
