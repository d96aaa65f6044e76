//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, audio).
//!
//! # Structure
//!
//! - `word` - Vocabulary entries and their ordering/filtering rules
//! - `user` - The authenticated identity words belong to

mod user;
pub mod word;

pub use user::User;
pub use word::{NewWord, Word, WordId, WordUpdate, filter_words, practice_order};
