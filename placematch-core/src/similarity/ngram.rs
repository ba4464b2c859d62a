//! Character n-gram overlap

use super::TokenSimilarity;
use std::collections::HashSet;

/// Default n-gram size
pub const DEFAULT_SIZE: usize = 2;

/// Default minimum Dice coefficient for two tokens to match
pub const DEFAULT_THRESHOLD: f64 = 0.83;

/// Matches tokens whose n-gram sets have a Dice coefficient at or above a
/// threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NGram {
    size: usize,
    threshold: f64,
}

impl NGram {
    /// Create with n-gram `size` (at least 1) and `threshold` in `[0, 1]`
    pub fn new(size: usize, threshold: f64) -> Self {
        Self {
            size: size.max(1),
            threshold,
        }
    }

    /// Configured n-gram size
    pub fn size(&self) -> usize {
        self.size
    }

    /// Configured threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Dice coefficient of the two tokens' n-gram sets, in `[0, 1]`
    pub fn coefficient(&self, a: &str, b: &str) -> f64 {
        let left = ngrams(a, self.size);
        let right = ngrams(b, self.size);

        let shared = left.intersection(&right).count();
        (2 * shared) as f64 / (left.len() + right.len()) as f64
    }
}

impl Default for NGram {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_THRESHOLD)
    }
}

impl TokenSimilarity for NGram {
    fn is_match(&self, a: &str, b: &str) -> bool {
        self.coefficient(a, b) >= self.threshold
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}

/// Set of overlapping char n-grams of `token`.
///
/// A token shorter than `size` chars yields a single n-gram equal to the
/// whole token, so the set is never empty.
pub fn ngrams(token: &str, size: usize) -> HashSet<&str> {
    let bounds: Vec<usize> = token
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(token.len()))
        .collect();

    let char_count = bounds.len() - 1;
    if char_count < size {
        return HashSet::from([token]);
    }

    bounds
        .windows(size + 1)
        .map(|w| &token[w[0]..w[size]])
        .collect()
}
