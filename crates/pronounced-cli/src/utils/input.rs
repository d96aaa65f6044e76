//! Interactive prompts on stdin.

use anyhow::{Context, Result};
use std::io::{self, Write};

/// Print `prompt` and read one trimmed line.
pub fn prompt_string(prompt: &str) -> Result<String> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{prompt}: ").and_then(|()| stdout.flush())?;
    drop(stdout);

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Cannot read from stdin")?;
    Ok(line.trim().to_string())
}

/// Interpret a yes/no answer. Empty input means no.
fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Ask a yes/no question until the answer parses. Defaults to no.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    loop {
        let input = prompt_string(&format!("{prompt} (y/N)"))?;
        if let Some(answer) = parse_confirmation(&input) {
            return Ok(answer);
        }
        eprintln!("Answer y or n.");
    }
}
