//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, SecondsFormat, Utc};
use pronounced_core::{RepositoryError, User, Word};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

/// Shared SELECT column list for word queries.
pub const WORD_SELECT_COLUMNS: &str =
    "id, owner_id, text, sentence, is_favorite, created_at, updated_at";

/// Shared SELECT column list for user queries.
pub const USER_SELECT_COLUMNS: &str = "id, email, display_name, created_at";

/// Format a timestamp for storage.
///
/// Fixed-width RFC 3339 in UTC, so text ordering matches time ordering.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Serialization(format!("bad timestamp '{value}': {e}")))
}

/// Parse a stored UUID.
pub fn parse_uuid(value: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(value)
        .map_err(|e| RepositoryError::Serialization(format!("bad id '{value}': {e}")))
}

/// Map a driver error to a storage failure.
pub fn storage_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

fn get<'r, T>(row: &'r SqliteRow, column: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(column).map_err(storage_error)
}

/// Parse a database row into a Word.
pub fn row_to_word(row: &SqliteRow) -> Result<Word, RepositoryError> {
    let id: String = get(row, "id")?;
    let owner_id: String = get(row, "owner_id")?;
    let created_at: String = get(row, "created_at")?;
    let updated_at: String = get(row, "updated_at")?;

    Ok(Word {
        id: parse_uuid(&id)?,
        text: get(row, "text")?,
        sentence: get(row, "sentence")?,
        is_favorite: get::<i64>(row, "is_favorite")? != 0,
        owner_id: parse_uuid(&owner_id)?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

/// Parse a database row into a User.
pub fn row_to_user(row: &SqliteRow) -> Result<User, RepositoryError> {
    let id: String = get(row, "id")?;
    let created_at: String = get(row, "created_at")?;

    Ok(User {
        id: parse_uuid(&id)?,
        email: get(row, "email")?,
        display_name: get(row, "display_name")?,
        created_at: parse_timestamp(&created_at)?,
    })
}
