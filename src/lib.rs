//! # martrank
//!
//! Training core for MART (Multiple Additive Regression Trees) ranking
//! models: gradient boosting with regression trees over labeled,
//! query-grouped feature data.
//!
//! The crate owns the boosting loop and its supporting preparation work —
//! per-feature sorted-index permutations, adaptive split-threshold sets, and
//! the sorting primitives underneath them. The pieces it deliberately does
//! not own are reached through narrow trait contracts: the tree-growing
//! algorithm ([`TreeLearner`]), the evaluation metric ([`Metric`]), and model
//! persistence ([`ModelSink`]).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use martrank::*;
//! use ndarray::array;
//!
//! # struct MyMetric;
//! # impl Metric for MyMetric {
//! #     fn name(&self) -> &'static str { "my-metric" }
//! #     fn evaluate(&self, _: &Dataset, _: &[Score]) -> Result<MetricScore> { Ok(0.0) }
//! # }
//! # struct MyLearnerFactory;
//! # impl TreeLearnerFactory for MyLearnerFactory {
//! #     fn create<'a>(&self, _: TreeLearnerContext<'a>) -> Result<Box<dyn TreeLearner + 'a>> {
//! #         Err(MartError::internal("example"))
//! #     }
//! # }
//! # fn main() -> martrank::Result<()> {
//! let features = array![[0.1_f32, 1.0], [0.4, 2.0], [0.4, 3.0], [0.9, 4.0]];
//! let labels = array![3.0, 2.0, 1.0, 0.0];
//! let mut training = Dataset::new(features, labels, None)?;
//!
//! let config = MartConfigBuilder::new()
//!     .num_trees(500)
//!     .shrinkage(0.1)
//!     .num_leaves(10)
//!     .build()?;
//!
//! let ranker = MartRanker::new(config)?;
//! let (ensemble, report) = ranker.learn(
//!     &mut training,
//!     None,
//!     &MyMetric,
//!     &MyLearnerFactory,
//!     &mut NullSink,
//!     &mut LogObserver,
//! )?;
//! println!("{} trees, metric {:.4}", ensemble.len(), report.training_metric);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: type aliases, error handling, collaborator traits, sort
//!   primitives
//! - [`config`]: training configuration with fail-fast validation
//! - [`dataset`]: query-grouped dataset and one-time feature preparation
//! - [`boosting`]: the driver, ensemble, validation tracker, and observers
//! - [`io`]: textual model header and the persistence boundary

#![warn(missing_docs)]
#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

pub mod boosting;
pub mod config;
pub mod core;
pub mod dataset;
pub mod io;

pub use crate::core::{
    error::{MartError, Result},
    traits::{Metric, RegressionTree, TreeLearner, TreeLearnerContext, TreeLearnerFactory},
    types::{Feature, InstanceId, IterationIndex, Label, MetricScore, Score},
};

pub use config::{MartConfig, MartConfigBuilder};

pub use dataset::{DataLayout, Dataset, SortedIndexTable, ThresholdTable, THRESHOLD_SENTINEL};

pub use boosting::{
    Ensemble, LogObserver, MartRanker, NullObserver, TrainingObserver, TrainingReport,
    ValidationTracker,
};

pub use io::{LogSink, ModelHeader, ModelSink, NullSink};
