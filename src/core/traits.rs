//! Trait contracts for the external collaborators of the training core.
//!
//! The boosting driver never sees inside the tree-growing algorithm or the
//! evaluation metric; it talks to them exclusively through these traits. The
//! residual slices handed across these boundaries are borrowed for the
//! duration of the call only, so no collaborator can observe a partially
//! updated round.

use crate::core::error::Result;
use crate::core::types::{Feature, MetricScore, Score};
use crate::dataset::dataset::Dataset;
use crate::dataset::sorted_index::SortedIndexTable;
use crate::dataset::thresholds::ThresholdTable;
use ndarray::ArrayView1;

/// Evaluation metric over a query-grouped dataset. Higher is better.
pub trait Metric: Send + Sync {
    /// Human-readable metric name, used in reports.
    fn name(&self) -> &'static str;

    /// Score the given per-instance model outputs against the dataset's
    /// ground-truth labels. Called once per boosting round per dataset.
    fn evaluate(&self, dataset: &Dataset, scores: &[Score]) -> Result<MetricScore>;
}

/// A fitted regression tree returned by the tree learner.
///
/// Ownership transfers to the ensemble on append; the driver holds the tree
/// only long enough to refine its leaves and fold its predictions into the
/// model-score arrays.
pub trait RegressionTree {
    /// Adjust leaf output values against the round's residuals
    /// (Newton-Raphson style refinement, internal to the tree component).
    fn refine_leaf_outputs(&mut self, residuals: &[Score]) -> Result<()>;

    /// Predict the tree's output for one instance's feature vector.
    fn evaluate(&self, instance: ArrayView1<'_, Feature>) -> Score;
}

/// External histogram/tree-fitting component.
///
/// Constructed once at initialization with the prepared per-feature sorted
/// indices and thresholds (see [`TreeLearnerContext`]); per round, the driver
/// refreshes it with fresh residuals and requests one fitted tree.
pub trait TreeLearner {
    /// Re-derive internal per-bin statistics from this round's residuals.
    fn refresh(&mut self, residuals: &[Score]) -> Result<()>;

    /// Fit a regression tree against the residuals, using the sorted-index
    /// and threshold tables received at construction to search splits.
    fn fit(&mut self, residuals: &[Score]) -> Result<Box<dyn RegressionTree>>;
}

/// Everything a tree learner needs at construction time. The table
/// references are immutable for the rest of training and may be retained by
/// the learner for the lifetime of the borrow.
#[derive(Debug, Clone, Copy)]
pub struct TreeLearnerContext<'a> {
    /// Training dataset, guaranteed to be in vertical layout.
    pub dataset: &'a Dataset,
    /// Per-feature instance permutations, each ascending in feature value.
    pub sorted_indices: &'a SortedIndexTable,
    /// Per-feature candidate split thresholds, sentinel-terminated.
    pub thresholds: &'a ThresholdTable,
    /// Minimum number of instances a leaf must cover.
    pub min_leaf_support: usize,
    /// Maximum number of leaves per tree.
    pub max_leaves: usize,
}

/// Factory for the tree-fitting component, invoked once during driver
/// initialization.
///
/// The returned learner may borrow the dataset and the prepared tables for
/// as long as the context's lifetime; the driver keeps them alive and
/// immutable for the whole run.
pub trait TreeLearnerFactory {
    /// Build the learner for this training run.
    fn create<'a>(&self, ctx: TreeLearnerContext<'a>) -> Result<Box<dyn TreeLearner + 'a>>;
}
