//! Sliding-window token alignment
//!
//! For a place name of `P` tokens and a message of `M` tokens, every start
//! offset `i` in `0..=M-P` is a candidate window. A window is reported when
//! each place token is fuzzy-equal to the message token at the same
//! position. Checks run in the order given by the [`AnchorPolicy`] and a
//! window is abandoned at its first failing check, so with the default
//! first/last anchoring most windows cost a single comparison.
//!
//! Overlapping windows are reported independently; no deduplication is
//! applied.

use crate::anchor::AnchorPolicy;
use crate::similarity::TokenSimilarity;

/// Counters describing the work done by an aligner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignStats {
    /// Candidate windows examined
    pub windows: u64,
    /// Similarity invocations performed
    pub comparisons: u64,
    /// Windows reported as matches
    pub matches: u64,
}

impl AlignStats {
    /// Add another set of counters to this one
    pub fn merge(&mut self, other: &AlignStats) {
        self.windows += other.windows;
        self.comparisons += other.comparisons;
        self.matches += other.matches;
    }
}

/// Aligns one place-name token sequence against message token sequences
#[derive(Debug, Clone)]
pub struct TokenAligner<'a, S> {
    place: &'a [String],
    plan: Vec<usize>,
    similarity: S,
}

impl<'a, S: TokenSimilarity> TokenAligner<'a, S> {
    /// Create an aligner for `place` using `similarity` and `policy`
    pub fn new(place: &'a [String], similarity: S, policy: AnchorPolicy) -> Self {
        Self {
            place,
            plan: policy.plan(place),
            similarity,
        }
    }

    /// Place tokens being searched for
    pub fn place(&self) -> &[String] {
        self.place
    }

    /// Every valid window start offset in `message`, ascending
    pub fn align(&self, message: &[String]) -> Vec<usize> {
        let mut stats = AlignStats::default();
        self.align_with_stats(message, &mut stats)
    }

    /// Like [`align`](Self::align), accumulating counters into `stats`
    pub fn align_with_stats(&self, message: &[String], stats: &mut AlignStats) -> Vec<usize> {
        let p = self.place.len();
        let m = message.len();
        if p == 0 || m < p {
            return Vec::new();
        }

        let mut offsets = Vec::new();
        for i in 0..=m - p {
            stats.windows += 1;
            if self.window_matches(&message[i..i + p], stats) {
                stats.matches += 1;
                offsets.push(i);
            }
        }
        offsets
    }

    fn window_matches(&self, window: &[String], stats: &mut AlignStats) -> bool {
        for &k in &self.plan {
            stats.comparisons += 1;
            if !self.similarity.is_match(&self.place[k], &window[k]) {
                return false;
            }
        }
        true
    }
}

/// Align with the default first/last anchoring
pub fn align<S: TokenSimilarity>(place: &[String], message: &[String], similarity: S) -> Vec<usize> {
    TokenAligner::new(place, similarity, AnchorPolicy::FirstLast).align(message)
}
