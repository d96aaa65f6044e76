//! Prompt sent to the model for each word.

/// The instruction asking for one short practice sentence using `word`.
pub fn sentence_prompt(word: &str) -> String {
    format!(
        "Generate a simple, clear sentence using the word \"{word}\". The sentence should be:\n\
         - Easy to understand\n\
         - Appropriate for pronunciation practice\n\
         - Use the word in a natural context\n\
         - Keep it under 15 words\n\
         - Make it suitable for English learners\n\
         \n\
         Return only the sentence, nothing else."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_quotes_word() {
        let prompt = sentence_prompt("serendipity");
        assert!(prompt.contains("\"serendipity\""));
        assert!(prompt.contains("under 15 words"));
        assert!(prompt.ends_with("Return only the sentence, nothing else."));
    }
}
