//! Word domain types.
//!
//! A `Word` is a vocabulary entry owned by a single user: the text to
//! pronounce, an optional example sentence, and a favorite flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a stored word.
pub type WordId = Uuid;

/// A vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// Store-assigned identifier.
    pub id: WordId,
    /// The word (or short phrase) itself. Never empty.
    pub text: String,
    /// Optional example sentence. `None` rather than an empty string.
    pub sentence: Option<String>,
    /// Favorites are listed and played first.
    pub is_favorite: bool,
    /// ID of the user that owns this entry.
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Word {
    /// The example sentence, if it has any speakable content.
    #[must_use]
    pub fn speakable_sentence(&self) -> Option<&str> {
        self.sentence
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Case-insensitive match against the word text or its sentence.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.text.to_lowercase().contains(needle)
            || self
                .sentence
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(needle))
    }
}

/// Data for creating a new word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWord {
    pub text: String,
    pub sentence: Option<String>,
}

impl NewWord {
    /// Build a new word, trimming both fields.
    ///
    /// A blank sentence becomes `None`. Emptiness of `text` is checked by
    /// the service layer, which owns the user-facing message.
    pub fn new(text: impl AsRef<str>, sentence: Option<&str>) -> Self {
        Self {
            text: text.as_ref().trim().to_string(),
            sentence: normalize_sentence(sentence),
        }
    }
}

/// Partial update of a stored word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordUpdate {
    pub text: Option<String>,
    /// Use `Some(Some(sentence))` to set, `Some(None)` to clear, `None` to leave unchanged.
    pub sentence: Option<Option<String>>,
    pub is_favorite: Option<bool>,
}

impl WordUpdate {
    /// Whether applying this update would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_none() && self.sentence.is_none() && self.is_favorite.is_none()
    }

    /// Apply this update to a word in place.
    pub fn apply_to(&self, word: &mut Word) {
        if let Some(ref text) = self.text {
            word.text.clone_from(text);
        }
        if let Some(ref sentence) = self.sentence {
            word.sentence.clone_from(sentence);
        }
        if let Some(fav) = self.is_favorite {
            word.is_favorite = fav;
        }
    }
}

/// Trim a sentence, mapping blank input to `None`.
pub fn normalize_sentence(sentence: Option<&str>) -> Option<String> {
    sentence
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Order words for practice: favorites first, then newest first.
///
/// The sort is stable, so words with equal keys keep their incoming order.
pub fn practice_order(words: &mut [Word]) {
    words.sort_by(|a, b| {
        b.is_favorite
            .cmp(&a.is_favorite)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

/// Keep only words whose text or sentence contains `query` (case-insensitive).
///
/// An empty or whitespace-only query keeps everything.
pub fn filter_words(words: &[Word], query: &str) -> Vec<Word> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return words.to_vec();
    }
    words
        .iter()
        .filter(|w| w.matches_lowercase(&needle))
        .cloned()
        .collect()
}
