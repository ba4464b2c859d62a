//! Fuzzy place-name alignment for short messages
//!
//! Given a multi-word place name and a tokenized message, this crate finds
//! every window of the message whose tokens are pairwise fuzzy-equal to the
//! place-name tokens.
//!
//! # Architecture
//!
//! Everything here is deterministic and free of I/O:
//! - **Tokens**: whitespace tokenizer producing raw and normalized forms
//! - **Similarity**: closed family of token similarity strategies
//! - **Anchoring**: check-order policies that prune hopeless windows early
//! - **Aligner**: the sliding-window search itself
//!
//! Streaming corpora and running many queries concurrently is the job of
//! `placematch-engine`.
//!
//! # Example
//!
//! ```rust
//! use placematch_core::{MatchConfig, Message, PlaceQuery, TokenAligner};
//!
//! let config = MatchConfig::default();
//! let place = PlaceQuery::new("New York").unwrap();
//! let message = Message::parse(1, "17\tI visited Nwe York City");
//!
//! let aligner = TokenAligner::new(place.tokens(), config.similarity(), config.anchor);
//! assert!(aligner.align(message.tokens()).is_empty());
//!
//! let message = Message::parse(2, "18\tI visited New York City");
//! assert_eq!(aligner.align(message.tokens()), vec![2]);
//! ```

pub mod aligner;
pub mod anchor;
pub mod config;
pub mod error;
pub mod similarity;
pub mod token;
pub mod types;

pub use aligner::{align, AlignStats, TokenAligner};
pub use anchor::AnchorPolicy;
pub use config::{MatchConfig, MatchConfigBuilder};
pub use error::{CoreError, Result};
pub use similarity::{EditDistance, NGram, Phonetic, Similarity, StrategyKind, TokenSimilarity};
pub use token::{normalize, tokenize, Token};
pub use types::{MatchEvent, Message, PlaceQuery};
