//! Word display utilities for CLI output.

use chrono::Local;
use pronounced_core::{Word, WordId};

use super::tables::{print_separator, truncate_string};

/// Characters of the UUID shown in tables; usually enough to be unique.
pub const SHORT_ID_LEN: usize = 8;

/// Leading part of a word ID, accepted back by every `<id>` argument.
pub fn short_id(id: &WordId) -> String {
    id.to_string().chars().take(SHORT_ID_LEN).collect()
}

/// Options for displaying a word summary.
#[derive(Debug, Clone, Default)]
pub struct WordSummaryOpts<'a> {
    /// Optional title to display before the word details.
    pub title: Option<&'a str>,
    /// Whether to include the full ID.
    pub show_id: bool,
    /// Whether to include the timestamps.
    pub show_dates: bool,
}

impl<'a> WordSummaryOpts<'a> {
    /// Create options with a title and default style.
    pub fn with_title(title: &'a str) -> Self {
        Self {
            title: Some(title),
            ..Default::default()
        }
    }

    /// Create options for removal confirmation (includes ID and dates).
    pub fn for_removal() -> Self {
        Self {
            title: Some("Word to remove:"),
            show_id: true,
            show_dates: true,
        }
    }
}

/// Display a word summary to stdout.
pub fn display_word_summary(word: &Word, opts: &WordSummaryOpts<'_>) {
    if let Some(title) = opts.title {
        println!("{title}");
    }
    if opts.show_id {
        println!("  ID: {}", word.id);
    }
    let star = if word.is_favorite { " ★" } else { "" };
    println!("  Word: {}{star}", word.text);
    if let Some(sentence) = &word.sentence {
        println!("  Sentence: {sentence}");
    }
    if opts.show_dates {
        println!(
            "  Added: {}",
            word.created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
        );
        if word.updated_at != word.created_at {
            println!(
                "  Updated: {}",
                word.updated_at
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
            );
        }
    }
}

/// One table row: short id, favorite marker, word, sentence.
fn format_row(word: &Word) -> String {
    format!(
        "{:<9} {:<2} {:<24} {}",
        short_id(&word.id),
        if word.is_favorite { "★" } else { "" },
        truncate_string(&word.text, 24),
        truncate_string(word.sentence.as_deref().unwrap_or("--"), 60),
    )
}

/// Print words as a table in the order given.
pub fn print_word_table(words: &[Word]) {
    println!("{:<9} {:<2} {:<24} Sentence", "ID", "", "Word");
    print_separator(96);
    for word in words {
        println!("{}", format_row(word));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn word(text: &str, sentence: Option<&str>, favorite: bool) -> Word {
        let now = Utc::now();
        Word {
            id: "3f2a9c1e-0000-4000-8000-000000000001".parse().unwrap(),
            text: text.to_string(),
            sentence: sentence.map(str::to_string),
            is_favorite: favorite,
            owner_id: "00000000-0000-4000-8000-000000000002".parse().unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_short_id() {
        let w = word("cat", None, false);
        assert_eq!(short_id(&w.id), "3f2a9c1e");
    }

    #[test]
    fn test_format_row() {
        let row = format_row(&word("cat", Some("The cat sleeps."), true));
        assert!(row.starts_with("3f2a9c1e"));
        assert!(row.contains('★'));
        assert!(row.contains("The cat sleeps."));

        let row = format_row(&word("dog", None, false));
        assert!(row.ends_with("--"));
    }
}
