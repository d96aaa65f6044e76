//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_auth_provider;
mod sqlite_settings_repository;
mod sqlite_word_repository;

pub use sqlite_auth_provider::SqliteAuthProvider;
pub use sqlite_settings_repository::SqliteSettingsRepository;
pub use sqlite_word_repository::SqliteWordRepository;
