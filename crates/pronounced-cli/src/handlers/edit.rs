//! Edit command handler.

use anyhow::Result;
use pronounced_core::WordUpdate;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{WordSummaryOpts, display_word_summary};

/// Build the update from the edit flags.
fn build_update(word: Option<String>, sentence: Option<String>, clear_sentence: bool) -> WordUpdate {
    WordUpdate {
        text: word,
        sentence: if clear_sentence {
            Some(None)
        } else {
            sentence.map(Some)
        },
        is_favorite: None,
    }
}

/// Change a word's text and/or example sentence.
pub async fn execute(
    ctx: &CliContext,
    id: &str,
    word: Option<String>,
    sentence: Option<String>,
    clear_sentence: bool,
) -> Result<()> {
    let update = build_update(word, sentence, clear_sentence);
    if update.is_empty() {
        return Err(CliError::Arguments(
            "Nothing to change. Pass --word, --sentence or --clear-sentence.".into(),
        )
        .into());
    }

    let target = ctx.app().words().find(id).await?;
    let updated = ctx.app().words().update(target.id, update).await?;
    display_word_summary(&updated, &WordSummaryOpts::with_title("✓ Word updated:"));
    Ok(())
}
