//! List command handler.
//!
//! Displays the signed-in user's words in practice order.

use anyhow::Result;
use pronounced_core::{Word, WordService};

use crate::bootstrap::CliContext;
use crate::presentation::print_word_table;

/// Practice order, then the optional search filter.
fn select(words: Vec<Word>, search: Option<&str>) -> Vec<Word> {
    let ordered = WordService::practice_order(words);
    match search {
        Some(query) => WordService::search(&ordered, query),
        None => ordered,
    }
}

/// Execute the list command.
pub async fn execute(ctx: &CliContext, search: Option<&str>, json: bool) -> Result<()> {
    let words = ctx.app().words().list().await?;
    let total = words.len();
    let shown = select(words, search);

    if json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    if total == 0 {
        println!("No words yet.");
        println!("Use 'pronounced add <word>' to add your first word.");
        return Ok(());
    }
    if shown.is_empty() {
        println!("No words match '{}'.", search.unwrap_or_default());
        return Ok(());
    }

    if shown.len() == total {
        println!("{total} word(s):\n");
    } else {
        println!("{} of {total} word(s) match:\n", shown.len());
    }
    print_word_table(&shown);
    Ok(())
}
