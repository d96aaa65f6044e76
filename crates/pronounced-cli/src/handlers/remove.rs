//! Remove command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{WordSummaryOpts, display_word_summary};
use crate::utils::input;

/// Remove a word, confirming first unless `force` is set.
pub async fn execute(ctx: &CliContext, id: &str, force: bool) -> Result<()> {
    let word = ctx.app().words().find(id).await?;

    if !force {
        display_word_summary(&word, &WordSummaryOpts::for_removal());
        println!();

        let confirm = input::prompt_confirmation("Are you sure you want to remove this word?")?;
        if !confirm {
            println!("Remove operation cancelled.");
            return Ok(());
        }
    }

    ctx.app().words().remove(word.id).await?;
    println!("✓ Removed '{}'.", word.text);
    Ok(())
}
