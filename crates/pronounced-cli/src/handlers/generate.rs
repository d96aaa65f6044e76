//! Generate command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Print a generated example sentence without saving anything.
pub async fn execute(ctx: &CliContext, word: &str) -> Result<()> {
    let sentence = ctx.app().sentences().generate(word).await?;
    println!("{sentence}");
    Ok(())
}
