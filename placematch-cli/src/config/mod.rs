//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use placematch_core::MatchConfig;
use placematch_engine::{Encoding, EngineConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Token matching configuration
    #[serde(default)]
    pub matching: MatchConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Words of context on each side of a match
    pub snippet_context: usize,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            snippet_context: placematch_engine::config::DEFAULT_SNIPPET_CONTEXT,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Map the corpus into memory instead of streaming it
    pub mmap: bool,

    /// Declared corpus encoding
    pub encoding: Encoding,
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse TOML configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Engine configuration described by this file
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            matching: self.matching,
            threads: match self.performance.worker_threads {
                0 => None,
                n => Some(n),
            },
            snippet_context: self.output.snippet_context,
            encoding: self.performance.encoding,
        }
    }

    /// Check every value the engine will see
    pub fn validate(&self) -> Result<()> {
        self.engine_config()
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placematch_core::{AnchorPolicy, StrategyKind};

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.engine_config(), EngineConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::from_toml(
            r#"
[matching]
strategy = "ngram"
ngram_threshold = 0.7
anchor = "longest-first"

[performance]
worker_threads = 4
encoding = "utf8"
"#,
        )
        .unwrap();

        assert_eq!(config.matching.strategy, StrategyKind::NGram);
        assert_eq!(config.matching.ngram_threshold, 0.7);
        assert_eq!(config.matching.ngram_size, 2);
        assert_eq!(config.matching.anchor, AnchorPolicy::LongestFirst);
        assert_eq!(config.output.format, OutputFormat::Text);

        let engine = config.engine_config();
        assert_eq!(engine.threads, Some(4));
        assert_eq!(engine.encoding, Encoding::Utf8);
    }

    #[test]
    fn test_out_of_range_threshold_fails_validation() {
        let config = CliConfig::from_toml("[matching]\nedit_distance_threshold = 1.5\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("edit_distance_threshold"));
    }

    #[test]
    fn test_unknown_strategy_is_parse_error() {
        assert!(CliConfig::from_toml("[matching]\nstrategy = \"metaphone\"\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/placematch.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
