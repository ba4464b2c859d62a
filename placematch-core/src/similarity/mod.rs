//! Token similarity strategies
//!
//! Every strategy answers one question: are two tokens "fuzzy-equal"?
//! Strategies are plain values with no interior state, so one instance can
//! be shared by any number of query tasks without synchronization.
//!
//! The set of strategies is closed: [`StrategyKind`] names them and
//! [`Similarity`] carries a configured instance of one of them. Adding a
//! heuristic means adding a variant plus one [`TokenSimilarity`] impl.

pub mod edit_distance;
pub mod ngram;
pub mod phonetic;

pub use edit_distance::EditDistance;
pub use ngram::NGram;
pub use phonetic::Phonetic;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pairwise fuzzy-equality decision between two tokens
pub trait TokenSimilarity: Send + Sync {
    /// Whether `a` and `b` are considered the same token
    fn is_match(&self, a: &str, b: &str) -> bool;

    /// Strategy name for logging
    fn name(&self) -> &'static str;
}

/// Identifier of a similarity strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Normalized Levenshtein similarity against a threshold
    #[default]
    EditDistance,
    /// Identical Soundex codes
    Phonetic,
    /// Dice coefficient over character n-grams against a threshold
    #[serde(rename = "ngram")]
    NGram,
}

impl StrategyKind {
    /// All strategies, in display order
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::EditDistance,
        StrategyKind::Phonetic,
        StrategyKind::NGram,
    ];

    /// Stable name used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::EditDistance => "edit-distance",
            StrategyKind::Phonetic => "phonetic",
            StrategyKind::NGram => "ngram",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            StrategyKind::EditDistance => {
                "normalized Levenshtein similarity at or above a threshold"
            }
            StrategyKind::Phonetic => "identical four-character Soundex codes",
            StrategyKind::NGram => "Dice coefficient of character n-grams at or above a threshold",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "edit-distance" | "edit_distance" | "levenshtein" => Ok(StrategyKind::EditDistance),
            "phonetic" | "soundex" => Ok(StrategyKind::Phonetic),
            "ngram" | "n-gram" | "2gram" => Ok(StrategyKind::NGram),
            other => Err(format!("unknown similarity strategy: {other}")),
        }
    }
}

/// A configured similarity strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Similarity {
    /// Edit-distance strategy
    EditDistance(EditDistance),
    /// Phonetic-code strategy
    Phonetic(Phonetic),
    /// N-gram strategy
    NGram(NGram),
}

impl Similarity {
    /// Which strategy this is
    pub fn kind(&self) -> StrategyKind {
        match self {
            Similarity::EditDistance(_) => StrategyKind::EditDistance,
            Similarity::Phonetic(_) => StrategyKind::Phonetic,
            Similarity::NGram(_) => StrategyKind::NGram,
        }
    }
}

impl TokenSimilarity for Similarity {
    #[inline]
    fn is_match(&self, a: &str, b: &str) -> bool {
        match self {
            Similarity::EditDistance(s) => s.is_match(a, b),
            Similarity::Phonetic(s) => s.is_match(a, b),
            Similarity::NGram(s) => s.is_match(a, b),
        }
    }

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }
}

impl<T: TokenSimilarity + ?Sized> TokenSimilarity for &T {
    fn is_match(&self, a: &str, b: &str) -> bool {
        (**self).is_match(a, b)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.as_str().parse::<StrategyKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_kind_aliases() {
        assert_eq!(
            "Soundex".parse::<StrategyKind>().unwrap(),
            StrategyKind::Phonetic
        );
        assert_eq!(
            "levenshtein".parse::<StrategyKind>().unwrap(),
            StrategyKind::EditDistance
        );
        assert!("cosine".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_kind_default_is_edit_distance() {
        assert_eq!(StrategyKind::default(), StrategyKind::EditDistance);
    }

    #[test]
    fn test_similarity_dispatch() {
        let edit = Similarity::EditDistance(EditDistance::new(0.85));
        let phonetic = Similarity::Phonetic(Phonetic);
        let ngram = Similarity::NGram(NGram::new(2, 0.83));

        assert!(edit.is_match("philadelphia", "philadelpia"));
        assert!(!edit.is_match("boston", "austin"));
        assert!(phonetic.is_match("robert", "rupert"));
        assert!(ngram.is_match("chicago", "chicago"));
        assert!(!ngram.is_match("chicago", "houston"));

        assert_eq!(edit.kind(), StrategyKind::EditDistance);
        assert_eq!(phonetic.name(), "phonetic");
        assert_eq!(ngram.name(), "ngram");
    }
}
