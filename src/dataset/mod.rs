//! Dataset management and one-time feature preparation.
//!
//! The training core consumes the dataset through vertical (feature-major)
//! column views; [`sorted_index`] and [`thresholds`] hold the per-feature
//! tables built once before the first boosting round.

pub mod dataset;
pub mod sorted_index;
pub mod thresholds;

pub use dataset::{DataLayout, Dataset};
pub use sorted_index::SortedIndexTable;
pub use thresholds::{ThresholdTable, THRESHOLD_SENTINEL};
