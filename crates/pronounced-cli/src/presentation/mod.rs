//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: ordering, filtering and other domain
//! transforms belong in core services.

pub mod tables;
pub mod word_display;

// Re-export commonly used items
pub use tables::{format_optional, print_separator, truncate_string};
pub use word_display::{WordSummaryOpts, display_word_summary, print_word_table, short_id};
