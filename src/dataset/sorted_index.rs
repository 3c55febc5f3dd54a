//! Per-feature sorted-index preparation.
//!
//! For every feature, a permutation of instance indices ordering instances by
//! that feature's value ascending. Built exactly once before training starts
//! and immutable afterwards; the tree learner borrows it read-only for the
//! whole run. Features are fully independent, so construction is a parallel
//! map with one output slot per feature.

use crate::core::error::Result;
use crate::core::types::InstanceId;
use crate::core::utils::qsort;
use crate::dataset::dataset::Dataset;
use rayon::prelude::*;

/// One ascending instance permutation per feature.
#[derive(Debug, Clone)]
pub struct SortedIndexTable {
    columns: Vec<Vec<InstanceId>>,
}

impl SortedIndexTable {
    /// Build the table for every feature of `dataset` in parallel.
    ///
    /// The dataset must already be in vertical layout.
    pub fn build(dataset: &Dataset) -> Result<SortedIndexTable> {
        let columns = (0..dataset.num_features())
            .into_par_iter()
            .map(|feature| {
                let column = dataset.feature_column(feature)?;
                let idx = match column.as_slice() {
                    Some(values) => qsort::argsort(values),
                    None => qsort::argsort(&column.to_vec()),
                };
                Ok(idx)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(SortedIndexTable { columns })
    }

    /// Number of features covered.
    pub fn num_features(&self) -> usize {
        self.columns.len()
    }

    /// The ascending instance permutation for one feature.
    ///
    /// # Panics
    ///
    /// Panics if `feature >= num_features()`.
    pub fn feature(&self, feature: usize) -> &[InstanceId] {
        &self.columns[feature]
    }
}
