//! Per-feature candidate split thresholds.
//!
//! For each feature the builder derives an ascending threshold set terminated
//! by a sentinel meaning "value exceeds all real thresholds". When no cap is
//! configured the set is the exact unique observed values, giving per-value
//! splits; with a cap, features whose cardinality exceeds it fall back to
//! evenly spaced bins between the observed minimum and maximum, trading split
//! accuracy for bounded search cost per tree node.

use crate::core::error::Result;
use crate::core::types::{Feature, InstanceId};
use crate::dataset::dataset::Dataset;
use crate::dataset::sorted_index::SortedIndexTable;
use ndarray::ArrayView1;
use rayon::prelude::*;

/// Sentinel terminating every threshold array.
pub const THRESHOLD_SENTINEL: Feature = Feature::MAX;

/// One sentinel-terminated ascending threshold array per feature.
///
/// Invariant: each array is strictly increasing except for the trailing
/// sentinel, and holds at most `cap + 1` entries when a cap is configured.
#[derive(Debug, Clone)]
pub struct ThresholdTable {
    columns: Vec<Vec<Feature>>,
}

impl ThresholdTable {
    /// Build the table for every feature of `dataset` in parallel, walking
    /// each feature's sorted order from `sorted`. `cap` of 0 means
    /// unbounded (exact unique values).
    ///
    /// The dataset must already be in vertical layout.
    pub fn build(dataset: &Dataset, sorted: &SortedIndexTable, cap: usize) -> Result<ThresholdTable> {
        let columns = (0..dataset.num_features())
            .into_par_iter()
            .map(|feature| {
                let column = dataset.feature_column(feature)?;
                Ok(feature_thresholds(column, sorted.feature(feature), cap))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ThresholdTable { columns })
    }

    /// Number of features covered.
    pub fn num_features(&self) -> usize {
        self.columns.len()
    }

    /// The threshold array for one feature.
    ///
    /// # Panics
    ///
    /// Panics if `feature >= num_features()`.
    pub fn feature(&self, feature: usize) -> &[Feature] {
        &self.columns[feature]
    }
}

/// Derive the threshold set for a single feature column.
fn feature_thresholds(column: ArrayView1<'_, Feature>, order: &[InstanceId], cap: usize) -> Vec<Feature> {
    let n = order.len();
    let mut last = column[order[0] as usize];
    let mut uniques = Vec::with_capacity(if cap == 0 { n + 1 } else { cap + 2 });
    uniques.push(last);
    // Collect strictly increasing unique values in sorted order; with a cap,
    // stop as soon as we know the cardinality exceeds it.
    for &id in order.iter().skip(1) {
        if cap != 0 && uniques.len() == cap + 1 {
            break;
        }
        let value = column[id as usize];
        if last < value {
            uniques.push(value);
            last = value;
        }
    }

    if cap == 0 || uniques.len() <= cap {
        uniques.push(THRESHOLD_SENTINEL);
        uniques
    } else {
        // Too many distinct values: cap evenly spaced bins over [min, max].
        let min = column[order[0] as usize];
        let max = column[order[n - 1] as usize];
        let step = (max - min).abs() / cap as Feature;
        let mut thresholds = Vec::with_capacity(cap + 1);
        let mut t = min;
        for _ in 0..cap {
            thresholds.push(t);
            t += step;
        }
        thresholds.push(THRESHOLD_SENTINEL);
        thresholds
    }
}
