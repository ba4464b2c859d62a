//! Length-normalized edit distance

use super::TokenSimilarity;

/// Default minimum similarity for two tokens to match
pub const DEFAULT_THRESHOLD: f64 = 0.85;

/// Matches tokens whose normalized Levenshtein similarity reaches a threshold
///
/// Similarity is `1 - lev(a, b) / max(len(a), len(b))` counted in chars.
/// Against an empty string the distance is the other string's length, so
/// the similarity is 0; two empty strings are identical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditDistance {
    threshold: f64,
}

impl EditDistance {
    /// Create with the given threshold in `[0, 1]`
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Configured threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Normalized similarity in `[0, 1]`
    pub fn similarity(a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b)
    }
}

impl Default for EditDistance {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl TokenSimilarity for EditDistance {
    fn is_match(&self, a: &str, b: &str) -> bool {
        Self::similarity(a, b) >= self.threshold
    }

    fn name(&self) -> &'static str {
        "edit-distance"
    }
}
