//! `SQLite` implementation of the `WordRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use pronounced_core::{NewWord, RepositoryError, Word, WordId, WordRepository};

use super::row_mappers::{WORD_SELECT_COLUMNS, format_timestamp, row_to_word, storage_error};

/// `SQLite` implementation of the `WordRepository` trait.
pub struct SqliteWordRepository {
    pool: SqlitePool,
}

impl SqliteWordRepository {
    /// Create a new `SQLite` word repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WordRepository for SqliteWordRepository {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Word>, RepositoryError> {
        let sql = format!(
            "SELECT {WORD_SELECT_COLUMNS} FROM words WHERE owner_id = ? \
             ORDER BY created_at DESC, rowid DESC"
        );
        let rows = sqlx::query(&sql)
            .bind(owner_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_word).collect()
    }

    async fn get(&self, owner_id: Uuid, id: WordId) -> Result<Word, RepositoryError> {
        let sql = format!("SELECT {WORD_SELECT_COLUMNS} FROM words WHERE id = ? AND owner_id = ?");
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Word with ID {id}")))?;

        row_to_word(&row)
    }

    async fn insert(&self, owner_id: Uuid, word: &NewWord) -> Result<Word, RepositoryError> {
        let now = Utc::now();
        let stored = Word {
            id: Uuid::new_v4(),
            text: word.text.clone(),
            sentence: word.sentence.clone(),
            is_favorite: false,
            owner_id,
            created_at: now,
            updated_at: now,
        };
        let ts = format_timestamp(now);

        sqlx::query(
            "INSERT INTO words (id, owner_id, text, sentence, is_favorite, created_at, updated_at) \
             VALUES (?, ?, ?, ?, 0, ?, ?)",
        )
        .bind(stored.id.to_string())
        .bind(owner_id.to_string())
        .bind(&stored.text)
        .bind(&stored.sentence)
        .bind(&ts)
        .bind(&ts)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_check_violation() => {
                RepositoryError::Constraint(db.message().to_string())
            }
            other => storage_error(other),
        })?;

        // Round-trip through storage precision so callers see what a reload returns.
        self.get(owner_id, stored.id).await
    }

    async fn update(&self, word: &Word) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE words SET text = ?, sentence = ?, is_favorite = ?, updated_at = ? \
             WHERE id = ? AND owner_id = ?",
        )
        .bind(&word.text)
        .bind(&word.sentence)
        .bind(i64::from(word.is_favorite))
        .bind(format_timestamp(word.updated_at))
        .bind(word.id.to_string())
        .bind(word.owner_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Word with ID {}", word.id)));
        }
        Ok(())
    }

    async fn delete(&self, owner_id: Uuid, id: WordId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM words WHERE id = ? AND owner_id = ?")
            .bind(id.to_string())
            .bind(owner_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Word with ID {id}")));
        }
        Ok(())
    }
}
