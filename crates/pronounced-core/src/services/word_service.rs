//! Word service - vocabulary management for the signed-in user.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::word::normalize_sentence;
use crate::domain::{NewWord, Word, WordId, WordUpdate, filter_words, practice_order};
use crate::ports::{AuthProvider, CoreError, RepositoryError, WordRepository};

/// Service for word operations.
///
/// Every operation requires a signed-in user and only ever sees that user's
/// words. Store faults are returned as-is; there is no retry.
pub struct WordService {
    repo: Arc<dyn WordRepository>,
    auth: Arc<dyn AuthProvider>,
}

impl WordService {
    /// Create a new word service.
    pub fn new(repo: Arc<dyn WordRepository>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { repo, auth }
    }

    async fn owner_id(&self) -> Result<Uuid, CoreError> {
        self.auth
            .current_user()
            .await?
            .map(|u| u.id)
            .ok_or(CoreError::Unauthenticated)
    }

    /// All of the user's words, newest first.
    pub async fn list(&self) -> Result<Vec<Word>, CoreError> {
        let owner = self.owner_id().await?;
        Ok(self.repo.list_by_owner(owner).await?)
    }

    /// Get one word by ID.
    pub async fn get(&self, id: WordId) -> Result<Word, CoreError> {
        let owner = self.owner_id().await?;
        Ok(self.repo.get(owner, id).await?)
    }

    /// Resolve a full ID or a unique ID prefix to a word.
    pub async fn find(&self, id_or_prefix: &str) -> Result<Word, CoreError> {
        let needle = id_or_prefix.trim().to_lowercase();
        if needle.is_empty() {
            return Err(CoreError::Validation("Word ID cannot be empty".into()));
        }
        if let Ok(id) = Uuid::parse_str(&needle) {
            return self.get(id).await;
        }

        let mut hits: Vec<Word> = self
            .list()
            .await?
            .into_iter()
            .filter(|w| w.id.to_string().starts_with(&needle))
            .collect();
        match hits.len() {
            0 => Err(RepositoryError::NotFound(format!("word {id_or_prefix}")).into()),
            1 => Ok(hits.remove(0)),
            n => Err(CoreError::Validation(format!(
                "ID prefix '{id_or_prefix}' matches {n} words"
            ))),
        }
    }

    /// Add a word with an optional example sentence.
    pub async fn add(&self, text: &str, sentence: Option<&str>) -> Result<Word, CoreError> {
        let new_word = NewWord::new(text, sentence);
        if new_word.text.is_empty() {
            return Err(CoreError::Validation("Please enter a word".into()));
        }
        let owner = self.owner_id().await?;
        let word = self.repo.insert(owner, &new_word).await?;
        tracing::debug!(id = %word.id, text = %word.text, "Added word");
        Ok(word)
    }

    /// Apply a partial update to one of the user's words.
    ///
    /// Text is trimmed and must stay non-empty; a blank sentence clears it.
    pub async fn update(&self, id: WordId, update: WordUpdate) -> Result<Word, CoreError> {
        let update = normalize_update(update)?;
        let mut word = self.get(id).await?;
        if update.is_empty() {
            return Ok(word);
        }
        update.apply_to(&mut word);
        word.updated_at = chrono::Utc::now();
        self.repo.update(&word).await?;
        Ok(word)
    }

    /// Flip the favorite flag, returning the updated word.
    pub async fn toggle_favorite(&self, id: WordId) -> Result<Word, CoreError> {
        let word = self.get(id).await?;
        let update = WordUpdate {
            is_favorite: Some(!word.is_favorite),
            ..Default::default()
        };
        self.update(id, update).await
    }

    /// Delete one of the user's words.
    pub async fn remove(&self, id: WordId) -> Result<(), CoreError> {
        let owner = self.owner_id().await?;
        self.repo.delete(owner, id).await?;
        tracing::debug!(%id, "Removed word");
        Ok(())
    }

    /// Sort for practice: favorites first, then newest first.
    #[must_use]
    pub fn practice_order(mut words: Vec<Word>) -> Vec<Word> {
        practice_order(&mut words);
        words
    }

    /// Case-insensitive search over word text and sentence.
    #[must_use]
    pub fn search(words: &[Word], query: &str) -> Vec<Word> {
        filter_words(words, query)
    }

    /// The list a "play all" session should run over.
    ///
    /// Ordered for practice and filtered by `query`; when nothing matches,
    /// the whole ordered list is played instead.
    pub async fn playlist(&self, query: Option<&str>) -> Result<Vec<Word>, CoreError> {
        let ordered = Self::practice_order(self.list().await?);
        let filtered = query.map_or_else(|| ordered.clone(), |q| Self::search(&ordered, q));
        Ok(if filtered.is_empty() { ordered } else { filtered })
    }
}

fn normalize_update(mut update: WordUpdate) -> Result<WordUpdate, CoreError> {
    if let Some(text) = update.text.take() {
        let text = text.trim();
        if text.is_empty() {
            return Err(CoreError::Validation("Please enter a word".into()));
        }
        update.text = Some(text.to_string());
    }
    if let Some(sentence) = update.sentence.take() {
        update.sentence = Some(normalize_sentence(sentence.as_deref()));
    }
    Ok(update)
}
