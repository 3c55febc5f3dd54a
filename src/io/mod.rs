//! Model persistence boundary.
//!
//! The driver hands the ensemble to a [`ModelSink`] on a configurable round
//! cadence (best effort) and once at the end of training. The textual
//! [`ModelHeader`] reproduces the ranker description block byte for byte for
//! compatibility with existing model files.

use crate::boosting::ensemble::Ensemble;
use crate::config::MartConfig;
use crate::core::error::Result;
use crate::core::types::IterationIndex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Textual ranker description written at the top of a saved model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelHeader {
    /// Maximum number of trees configured.
    pub num_trees: usize,
    /// Maximum number of leaves per tree.
    pub num_leaves: usize,
    /// Per-tree shrinkage (learning rate).
    pub shrinkage: f32,
    /// Minimum leaf support.
    pub min_leaf_support: usize,
    /// Threshold cap, 0 meaning unlimited.
    pub num_thresholds: usize,
    /// Early stopping window, 0 meaning disabled.
    pub early_stopping_rounds: usize,
}

impl ModelHeader {
    /// Build the header from a training configuration.
    pub fn from_config(config: &MartConfig) -> Self {
        ModelHeader {
            num_trees: config.num_trees,
            num_leaves: config.num_leaves,
            shrinkage: config.shrinkage,
            min_leaf_support: config.min_leaf_support,
            num_thresholds: config.num_thresholds,
            early_stopping_rounds: config.early_stopping_rounds,
        }
    }

    /// Write the header lines to a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        write!(writer, "{}", self)?;
        Ok(())
    }
}

impl fmt::Display for ModelHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Ranker: MART")?;
        writeln!(f, "# max no. of trees = {}", self.num_trees)?;
        writeln!(f, "# no. of tree leaves = {}", self.num_leaves)?;
        writeln!(f, "# shrinkage = {}", self.shrinkage)?;
        writeln!(f, "# min leaf support = {}", self.min_leaf_support)?;
        if self.num_thresholds != 0 {
            writeln!(f, "# no. of thresholds = {}", self.num_thresholds)?;
        } else {
            writeln!(f, "# no. of thresholds = unlimited")?;
        }
        if self.early_stopping_rounds != 0 {
            writeln!(
                f,
                "# no. of no gain rounds before early stop = {}",
                self.early_stopping_rounds
            )?;
        }
        Ok(())
    }
}

/// Destination for checkpoints and the final model.
///
/// Checkpoint failures are swallowed and logged by the driver; they must not
/// abort training.
pub trait ModelSink {
    /// Persist an in-progress snapshot after the given 1-based round.
    fn checkpoint(&mut self, ensemble: &Ensemble, round: IterationIndex) -> Result<()>;

    /// Persist the final model.
    fn save(&mut self, ensemble: &Ensemble, header: &ModelHeader) -> Result<()>;
}

/// Sink that reports persistence events through the `log` crate without
/// writing anything. Useful as a default when no model output is wanted.
#[derive(Debug, Default)]
pub struct LogSink;

impl ModelSink for LogSink {
    fn checkpoint(&mut self, ensemble: &Ensemble, round: IterationIndex) -> Result<()> {
        log::debug!("checkpoint at round {}: {} trees", round, ensemble.len());
        Ok(())
    }

    fn save(&mut self, ensemble: &Ensemble, header: &ModelHeader) -> Result<()> {
        log::info!("final model: {} trees", ensemble.len());
        for line in header.to_string().lines() {
            log::info!("{}", line);
        }
        Ok(())
    }
}

/// Sink that discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl ModelSink for NullSink {
    fn checkpoint(&mut self, _ensemble: &Ensemble, _round: IterationIndex) -> Result<()> {
        Ok(())
    }

    fn save(&mut self, _ensemble: &Ensemble, _header: &ModelHeader) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> ModelHeader {
        ModelHeader {
            num_trees: 1000,
            num_leaves: 10,
            shrinkage: 0.1,
            min_leaf_support: 1,
            num_thresholds: 0,
            early_stopping_rounds: 100,
        }
    }

    #[test]
    fn test_header_format_unlimited_thresholds() {
        assert_eq!(
            header().to_string(),
            "# Ranker: MART\n\
             # max no. of trees = 1000\n\
             # no. of tree leaves = 10\n\
             # shrinkage = 0.1\n\
             # min leaf support = 1\n\
             # no. of thresholds = unlimited\n\
             # no. of no gain rounds before early stop = 100\n"
        );
    }

    #[test]
    fn test_header_format_capped_no_early_stop() {
        let mut h = header();
        h.num_thresholds = 256;
        h.early_stopping_rounds = 0;
        let text = h.to_string();
        assert!(text.contains("# no. of thresholds = 256\n"));
        assert!(!text.contains("early stop"));
    }

    #[test]
    fn test_header_write_to() {
        let mut buf = Vec::new();
        header().write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), header().to_string());
    }
}
