//! Core error types (deterministic only)

use core::fmt;

/// Core matching errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A place name produced no tokens
    EmptyPlaceName(String),
    /// A similarity threshold outside `[0, 1]` or not finite
    InvalidThreshold {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },
    /// N-gram size of zero
    InvalidNGramSize(usize),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::EmptyPlaceName(name) => {
                write!(f, "place name {name:?} contains no tokens")
            }
            CoreError::InvalidThreshold { name, value } => {
                write!(f, "{name} must be within [0.0, 1.0], got {value}")
            }
            CoreError::InvalidNGramSize(size) => {
                write!(f, "n-gram size must be at least 1, got {size}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
