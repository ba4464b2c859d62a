//! Engine error types
//!
//! Every variant is local to the query task that raised it; nothing here is
//! allowed to take down the coordinator or sibling tasks.

use crate::encoding::Encoding;
use placematch_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// The input could not be opened or mapped
    #[error("source unavailable: {origin}: {reason}")]
    SourceUnavailable {
        /// Path or description of the input
        origin: String,
        /// Underlying cause
        reason: String,
    },

    /// Bytes invalid under the declared encoding
    #[error("invalid {encoding} data in {origin} at line {line}")]
    DecodeFailure {
        /// Path or description of the input
        origin: String,
        /// 1-based line holding the first invalid byte
        line: u64,
        /// Declared encoding
        encoding: Encoding,
    },

    /// A read failed after the source was opened
    #[error("read failed in {origin} after line {line}: {reason}")]
    ReadFailure {
        /// Path or description of the input
        origin: String,
        /// Last line read successfully
        line: u64,
        /// Underlying cause
        reason: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Worker pool could not be created
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// Core matching error
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

impl EngineError {
    /// Short machine-friendly name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::SourceUnavailable { .. } => "source-unavailable",
            EngineError::DecodeFailure { .. } => "decode-failure",
            EngineError::ReadFailure { .. } => "read-failure",
            EngineError::InvalidConfig(_) => "invalid-config",
            EngineError::ThreadPool(_) => "thread-pool",
            EngineError::Core(_) => "core",
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
