//! Training configuration for the MART learner.
//!
//! Configuration is validated up front: a rejected configuration never
//! reaches allocation or training, and values are never silently clamped.

use crate::core::error::{MartError, Result};
use serde::{Deserialize, Serialize};

/// Default maximum number of trees.
pub const DEFAULT_NUM_TREES: usize = 1000;
/// Default maximum number of leaves per tree.
pub const DEFAULT_NUM_LEAVES: usize = 10;
/// Default per-tree shrinkage.
pub const DEFAULT_SHRINKAGE: f32 = 0.1;
/// Default minimum leaf support.
pub const DEFAULT_MIN_LEAF_SUPPORT: usize = 1;
/// Default early stopping window (rounds without validation improvement).
pub const DEFAULT_EARLY_STOPPING_ROUNDS: usize = 100;

/// MART training parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MartConfig {
    /// Maximum number of boosting rounds (ensemble capacity).
    pub num_trees: usize,
    /// Maximum number of leaves per tree, forwarded to the tree learner.
    pub num_leaves: usize,
    /// Learning-rate multiplier applied to each tree's contribution.
    pub shrinkage: f32,
    /// Minimum number of instances a leaf must cover, forwarded to the tree
    /// learner.
    pub min_leaf_support: usize,
    /// Cap on candidate split thresholds per feature; 0 means unlimited
    /// (exact unique values).
    pub num_thresholds: usize,
    /// Rounds without validation improvement tolerated before stopping;
    /// 0 disables early stopping.
    pub early_stopping_rounds: usize,
    /// Persist a checkpoint every this many rounds; 0 disables
    /// checkpointing.
    pub checkpoint_interval: usize,
}

impl Default for MartConfig {
    fn default() -> Self {
        MartConfig {
            num_trees: DEFAULT_NUM_TREES,
            num_leaves: DEFAULT_NUM_LEAVES,
            shrinkage: DEFAULT_SHRINKAGE,
            min_leaf_support: DEFAULT_MIN_LEAF_SUPPORT,
            num_thresholds: 0,
            early_stopping_rounds: DEFAULT_EARLY_STOPPING_ROUNDS,
            checkpoint_interval: 0,
        }
    }
}

impl MartConfig {
    /// Validate the configuration, rejecting anything training cannot run
    /// with.
    pub fn validate(&self) -> Result<()> {
        if self.num_trees == 0 {
            return Err(MartError::config("num_trees must be positive"));
        }
        if self.num_leaves < 2 {
            return Err(MartError::config("num_leaves must be at least 2"));
        }
        // NaN must fail this check too.
        if !(self.shrinkage > 0.0) {
            return Err(MartError::config(format!(
                "shrinkage must be positive, got {}",
                self.shrinkage
            )));
        }
        if self.min_leaf_support == 0 {
            return Err(MartError::config("min_leaf_support must be positive"));
        }
        Ok(())
    }
}

/// Builder for [`MartConfig`].
#[derive(Debug, Clone, Default)]
pub struct MartConfigBuilder {
    config: MartConfig,
}

impl MartConfigBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        MartConfigBuilder::default()
    }

    /// Set the maximum number of trees.
    pub fn num_trees(mut self, num_trees: usize) -> Self {
        self.config.num_trees = num_trees;
        self
    }

    /// Set the maximum number of leaves per tree.
    pub fn num_leaves(mut self, num_leaves: usize) -> Self {
        self.config.num_leaves = num_leaves;
        self
    }

    /// Set the per-tree shrinkage.
    pub fn shrinkage(mut self, shrinkage: f32) -> Self {
        self.config.shrinkage = shrinkage;
        self
    }

    /// Set the minimum leaf support.
    pub fn min_leaf_support(mut self, min_leaf_support: usize) -> Self {
        self.config.min_leaf_support = min_leaf_support;
        self
    }

    /// Set the per-feature threshold cap (0 = unlimited).
    pub fn num_thresholds(mut self, num_thresholds: usize) -> Self {
        self.config.num_thresholds = num_thresholds;
        self
    }

    /// Set the early stopping window (0 = disabled).
    pub fn early_stopping_rounds(mut self, rounds: usize) -> Self {
        self.config.early_stopping_rounds = rounds;
        self
    }

    /// Set the checkpoint cadence (0 = disabled).
    pub fn checkpoint_interval(mut self, interval: usize) -> Self {
        self.config.checkpoint_interval = interval;
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<MartConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(MartConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = MartConfigBuilder::new()
            .num_trees(500)
            .num_leaves(31)
            .shrinkage(0.05)
            .min_leaf_support(20)
            .num_thresholds(256)
            .early_stopping_rounds(0)
            .checkpoint_interval(50)
            .build()
            .unwrap();
        assert_eq!(config.num_trees, 500);
        assert_eq!(config.num_leaves, 31);
        assert_eq!(config.shrinkage, 0.05);
        assert_eq!(config.min_leaf_support, 20);
        assert_eq!(config.num_thresholds, 256);
        assert_eq!(config.early_stopping_rounds, 0);
        assert_eq!(config.checkpoint_interval, 50);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(MartConfigBuilder::new().num_trees(0).build().is_err());
        assert!(MartConfigBuilder::new().num_leaves(1).build().is_err());
        assert!(MartConfigBuilder::new().shrinkage(0.0).build().is_err());
        assert!(MartConfigBuilder::new().shrinkage(-0.1).build().is_err());
        assert!(MartConfigBuilder::new().shrinkage(f32::NAN).build().is_err());
        assert!(MartConfigBuilder::new().min_leaf_support(0).build().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = MartConfigBuilder::new()
            .num_trees(42)
            .num_thresholds(16)
            .build()
            .unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: MartConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
