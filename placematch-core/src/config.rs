//! Matching configuration

use crate::anchor::AnchorPolicy;
use crate::error::{CoreError, Result};
use crate::similarity::{EditDistance, NGram, Phonetic, Similarity, StrategyKind};
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Minimum normalized edit-distance similarity
    pub const EDIT_DISTANCE_THRESHOLD: f64 = crate::similarity::edit_distance::DEFAULT_THRESHOLD;

    /// N-gram size
    pub const NGRAM_SIZE: usize = crate::similarity::ngram::DEFAULT_SIZE;

    /// Minimum n-gram Dice coefficient
    pub const NGRAM_THRESHOLD: f64 = crate::similarity::ngram::DEFAULT_THRESHOLD;
}

/// Process-wide matching configuration
///
/// A plain `Copy` value: every query task receives its own copy at
/// construction, so there is nothing to mutate once tasks are running.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Selected similarity strategy
    pub strategy: StrategyKind,
    /// Threshold for the edit-distance strategy
    pub edit_distance_threshold: f64,
    /// N-gram size for the n-gram strategy
    pub ngram_size: usize,
    /// Threshold for the n-gram strategy
    pub ngram_threshold: f64,
    /// Check order used to prune windows
    pub anchor: AnchorPolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            edit_distance_threshold: defaults::EDIT_DISTANCE_THRESHOLD,
            ngram_size: defaults::NGRAM_SIZE,
            ngram_threshold: defaults::NGRAM_THRESHOLD,
            anchor: AnchorPolicy::default(),
        }
    }
}

impl MatchConfig {
    /// Create a configuration builder
    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder::default()
    }

    /// Validate thresholds and n-gram size
    pub fn validate(&self) -> Result<()> {
        check_threshold("edit_distance_threshold", self.edit_distance_threshold)?;
        check_threshold("ngram_threshold", self.ngram_threshold)?;
        if self.ngram_size == 0 {
            return Err(CoreError::InvalidNGramSize(self.ngram_size));
        }
        Ok(())
    }

    /// Instantiate the selected strategy
    pub fn similarity(&self) -> Similarity {
        match self.strategy {
            StrategyKind::EditDistance => {
                Similarity::EditDistance(EditDistance::new(self.edit_distance_threshold))
            }
            StrategyKind::Phonetic => Similarity::Phonetic(Phonetic),
            StrategyKind::NGram => {
                Similarity::NGram(NGram::new(self.ngram_size, self.ngram_threshold))
            }
        }
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::InvalidThreshold { name, value })
    }
}

/// Fluent builder for [`MatchConfig`]
#[derive(Debug, Default)]
pub struct MatchConfigBuilder {
    strategy: Option<StrategyKind>,
    edit_distance_threshold: Option<f64>,
    ngram_size: Option<usize>,
    ngram_threshold: Option<f64>,
    anchor: Option<AnchorPolicy>,
}

impl MatchConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the similarity strategy
    pub fn strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Set the edit-distance threshold
    pub fn edit_distance_threshold(mut self, threshold: f64) -> Self {
        self.edit_distance_threshold = Some(threshold);
        self
    }

    /// Set the n-gram size
    pub fn ngram_size(mut self, size: usize) -> Self {
        self.ngram_size = Some(size);
        self
    }

    /// Set the n-gram threshold
    pub fn ngram_threshold(mut self, threshold: f64) -> Self {
        self.ngram_threshold = Some(threshold);
        self
    }

    /// Select the anchoring policy
    pub fn anchor(mut self, anchor: AnchorPolicy) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<MatchConfig> {
        let mut config = MatchConfig::default();

        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(threshold) = self.edit_distance_threshold {
            config.edit_distance_threshold = threshold;
        }
        if let Some(size) = self.ngram_size {
            config.ngram_size = size;
        }
        if let Some(threshold) = self.ngram_threshold {
            config.ngram_threshold = threshold;
        }
        if let Some(anchor) = self.anchor {
            config.anchor = anchor;
        }

        config.validate()?;
        Ok(config)
    }
}
