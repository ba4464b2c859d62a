//! Anchoring policies for window pruning
//!
//! A window matches only if every place token matches its counterpart, so
//! the order of the checks never changes which windows match. It changes
//! how soon a hopeless window is abandoned. The default anchors on the
//! first and last tokens, which assumes a place name's first word is
//! written with high fidelity; names whose first word is commonly
//! abbreviated or misspelled are still missed, because every token has to
//! match in the end.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order in which a window's token checks run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorPolicy {
    /// First token, then last token, then the interior left to right
    #[default]
    FirstLast,
    /// Longest place token first, then the rest left to right
    LongestFirst,
    /// Plain left-to-right
    InOrder,
}

impl AnchorPolicy {
    /// All policies, in display order
    pub const ALL: [AnchorPolicy; 3] = [
        AnchorPolicy::FirstLast,
        AnchorPolicy::LongestFirst,
        AnchorPolicy::InOrder,
    ];

    /// Stable name used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorPolicy::FirstLast => "first-last",
            AnchorPolicy::LongestFirst => "longest-first",
            AnchorPolicy::InOrder => "in-order",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            AnchorPolicy::FirstLast => "anchor on the first and last tokens, then fill the interior",
            AnchorPolicy::LongestFirst => "anchor on the longest token, then check the rest",
            AnchorPolicy::InOrder => "check tokens left to right",
        }
    }

    /// Place-token indices in check order.
    ///
    /// Always a permutation of `0..place.len()`.
    pub fn plan<S: AsRef<str>>(&self, place: &[S]) -> Vec<usize> {
        let len = place.len();
        match self {
            AnchorPolicy::InOrder => (0..len).collect(),
            AnchorPolicy::FirstLast => {
                if len <= 1 {
                    return (0..len).collect();
                }
                let mut order = Vec::with_capacity(len);
                order.push(0);
                order.push(len - 1);
                order.extend(1..len - 1);
                order
            }
            AnchorPolicy::LongestFirst => {
                let Some(longest) = place
                    .iter()
                    .enumerate()
                    .rev()
                    .max_by_key(|(_, t)| t.as_ref().chars().count())
                    .map(|(i, _)| i)
                else {
                    return Vec::new();
                };
                let mut order = Vec::with_capacity(len);
                order.push(longest);
                order.extend((0..len).filter(|&i| i != longest));
                order
            }
        }
    }
}

impl fmt::Display for AnchorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnchorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first-last" | "first_last" | "anchored" => Ok(AnchorPolicy::FirstLast),
            "longest-first" | "longest_first" | "longest" => Ok(AnchorPolicy::LongestFirst),
            "in-order" | "in_order" | "sequential" => Ok(AnchorPolicy::InOrder),
            other => Err(format!("unknown anchor policy: {other}")),
        }
    }
}
