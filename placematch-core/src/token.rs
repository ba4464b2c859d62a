//! Whitespace tokenizer shared by place names and messages

/// A single word with its raw text and normalized matching form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The word as it appeared in the source text
    pub raw: String,
    /// Lowercased form with surrounding punctuation trimmed
    pub norm: String,
}

/// Normalize one word for matching.
///
/// Lowercases and trims non-alphanumeric characters from both ends, so
/// `"#NYC!"` becomes `"nyc"` while `"o'hare"` keeps its inner apostrophe.
pub fn normalize(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Split text into tokens.
///
/// Words whose normalized form is empty (bare punctuation, emoji) are
/// dropped so that raw and normalized sequences stay index-aligned.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .filter_map(|word| {
            let norm = normalize(word);
            if norm.is_empty() {
                None
            } else {
                Some(Token {
                    raw: word.to_string(),
                    norm,
                })
            }
        })
        .collect()
}
