//! Capacity-bounded additive tree ensemble.
//!
//! The ensemble is the sole long-term owner of fitted trees: the driver
//! transfers each tree in on [`Ensemble::push`] and never retains a handle of
//! its own. During training, per-instance scores are maintained
//! incrementally by the driver; [`Ensemble::predict`] exists for the full
//! rescoring pass at finalization, after a possible rollback.

use crate::core::error::{MartError, Result};
use crate::core::traits::RegressionTree;
use crate::core::types::{Feature, Score};
use crate::dataset::dataset::Dataset;
use ndarray::ArrayView1;
use std::fmt;

struct WeightedTree {
    tree: Box<dyn RegressionTree>,
    weight: f32,
}

/// Ordered collection of weighted regression trees forming the additive
/// model. Append-only during training; truncatable from the tail for the
/// validation rollback.
pub struct Ensemble {
    trees: Vec<WeightedTree>,
    capacity: usize,
}

impl Ensemble {
    /// Create an empty ensemble with a fixed maximum size.
    pub fn with_capacity(capacity: usize) -> Self {
        Ensemble {
            trees: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a tree with its weight, taking ownership.
    ///
    /// The training loop's round bound guards capacity, so hitting it here is
    /// an internal invariant violation.
    pub fn push(&mut self, tree: Box<dyn RegressionTree>, weight: f32) -> Result<()> {
        if self.trees.len() == self.capacity {
            return Err(MartError::internal(format!(
                "ensemble already at capacity {}",
                self.capacity
            )));
        }
        self.trees.push(WeightedTree { tree, weight });
        Ok(())
    }

    /// Discard trailing trees down to `len` entries. Idempotent when called
    /// again with the same length.
    pub fn truncate(&mut self, len: usize) -> Result<()> {
        if len > self.trees.len() {
            return Err(MartError::internal(format!(
                "cannot truncate ensemble of {} trees to {}",
                self.trees.len(),
                len
            )));
        }
        self.trees.truncate(len);
        Ok(())
    }

    /// Current number of trees.
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Whether the ensemble holds no trees.
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Configured maximum size.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Model output for one instance: the weighted sum of every tree's
    /// prediction. O(len) per call.
    pub fn predict(&self, instance: ArrayView1<'_, Feature>) -> Score {
        self.trees
            .iter()
            .map(|entry| entry.weight as Score * entry.tree.evaluate(instance))
            .sum()
    }

    /// Overwrite `scores` with the ensemble's output for every instance of
    /// `dataset`, walking queries in order.
    pub fn score_dataset(&self, dataset: &Dataset, scores: &mut [Score]) -> Result<()> {
        if scores.len() != dataset.num_instances() {
            return Err(MartError::dimension_mismatch(
                format!("{} scores", dataset.num_instances()),
                format!("{} scores", scores.len()),
            ));
        }
        for query in 0..dataset.num_queries() {
            for i in dataset.query_range(query) {
                scores[i] = self.predict(dataset.instance(i));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Ensemble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ensemble")
            .field("len", &self.trees.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
