//! Add command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{WordSummaryOpts, display_word_summary, short_id};

/// Add a word, optionally with a generated example sentence.
///
/// When `generate` is set and generation fails, nothing is saved.
pub async fn execute(
    ctx: &CliContext,
    word: &str,
    sentence: Option<&str>,
    generate: bool,
) -> Result<()> {
    let sentence = if generate {
        println!("Generating an example sentence...");
        Some(ctx.app().sentences().generate(word).await?)
    } else {
        sentence.map(str::to_string)
    };

    let added = ctx.app().words().add(word, sentence.as_deref()).await?;
    display_word_summary(&added, &WordSummaryOpts::with_title("✓ Word added:"));
    println!();
    println!("Practice it with: pronounced say {}", short_id(&added.id));
    Ok(())
}
