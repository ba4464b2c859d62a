//! Corpus streaming and concurrent query execution
//!
//! This crate turns the deterministic aligner from `placematch-core` into a
//! runnable search: message sources read the corpus, a query task drives one
//! place name through one pass over it, and the coordinator runs every task
//! on a shared worker pool, forwarding matches to a sink.

#![warn(missing_docs)]

pub mod config;
pub mod coordinator;
pub mod encoding;
pub mod error;
pub mod sink;
pub mod source;
pub mod task;

pub use config::EngineConfig;
pub use coordinator::{RunSummary, TaskCoordinator};
pub use encoding::Encoding;
pub use error::{EngineError, Result};
pub use sink::{CollectingSink, MatchSink, SinkEvent};
pub use source::{
    Corpus, FileSource, MappedRegion, MappedSource, MessageSource, RawLine, SourceOpener,
};
pub use task::{QueryTask, TaskOutcome, TaskReport, TaskState};

// Re-export from core for convenience
pub use placematch_core::{MatchConfig, MatchEvent, PlaceQuery};
