//! Configuration types for the engine

use crate::encoding::Encoding;
use crate::error::{EngineError, Result};
use placematch_core::MatchConfig;
use serde::{Deserialize, Serialize};

/// Words of context kept on each side of a matched window
pub const DEFAULT_SNIPPET_CONTEXT: usize = 2;

/// Engine configuration
///
/// Shared read-only by every query task of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Token matching settings
    pub matching: MatchConfig,
    /// Number of worker threads (None = auto)
    pub threads: Option<usize>,
    /// Words of context around a match in its snippet
    pub snippet_context: usize,
    /// Declared corpus encoding
    pub encoding: Encoding,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            matching: MatchConfig::default(),
            threads: None,
            snippet_context: DEFAULT_SNIPPET_CONTEXT,
            encoding: Encoding::default(),
        }
    }
}

impl EngineConfig {
    /// Configuration with the given matching settings and defaults elsewhere
    pub fn with_matching(matching: MatchConfig) -> Self {
        Self {
            matching,
            ..Self::default()
        }
    }

    /// Check matching settings and thread count
    pub fn validate(&self) -> Result<()> {
        self.matching.validate()?;
        if self.threads == Some(0) {
            return Err(EngineError::InvalidConfig(
                "thread count must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Worker threads to use
    pub fn thread_count(&self) -> usize {
        #[cfg(feature = "parallel")]
        {
            self.threads.unwrap_or_else(num_cpus::get)
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.threads.unwrap_or(1)
        }
    }
}
