//! Query-grouped training dataset with switchable memory layout.
//!
//! Feature preparation scans whole feature columns, so the training core
//! requires the vertical (feature-major) layout before building indices and
//! thresholds; [`Dataset::ensure_vertical`] performs the transpose on demand.

use crate::core::error::{MartError, Result};
use crate::core::types::{Feature, Label};
use ndarray::{Array1, Array2, ArrayView1};
use std::ops::Range;

/// Memory layout of the feature matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataLayout {
    /// Instance-major: shape `(num_instances, num_features)`, one contiguous
    /// row per instance.
    Horizontal,
    /// Feature-major: shape `(num_features, num_instances)`, one contiguous
    /// row per feature. Required for index and threshold preparation.
    Vertical,
}

/// A labeled, query-grouped instance set.
///
/// Instances belonging to the same query occupy a contiguous index range;
/// `query_boundaries` holds the cumulative offsets, starting at 0 and ending
/// at `num_instances`.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Array2<Feature>,
    labels: Array1<Label>,
    query_boundaries: Vec<usize>,
    layout: DataLayout,
}

impl Dataset {
    /// Create a dataset from an instance-major feature matrix, per-instance
    /// labels, and optional query boundaries.
    ///
    /// When `query_boundaries` is `None` the whole dataset is treated as a
    /// single query. Boundaries must start at 0, end at the instance count,
    /// and be strictly increasing.
    pub fn new(
        features: Array2<Feature>,
        labels: Array1<Label>,
        query_boundaries: Option<Vec<usize>>,
    ) -> Result<Self> {
        let (num_instances, num_features) = features.dim();
        if num_instances == 0 {
            return Err(MartError::dataset("dataset has zero instances"));
        }
        if num_features == 0 {
            return Err(MartError::dataset("dataset has zero features"));
        }
        if labels.len() != num_instances {
            return Err(MartError::dimension_mismatch(
                format!("{} labels", num_instances),
                format!("{} labels", labels.len()),
            ));
        }

        let query_boundaries = query_boundaries.unwrap_or_else(|| vec![0, num_instances]);
        if query_boundaries.first() != Some(&0) || query_boundaries.last() != Some(&num_instances) {
            return Err(MartError::dataset(format!(
                "query boundaries must span 0..{}",
                num_instances
            )));
        }
        if query_boundaries.windows(2).any(|w| w[0] >= w[1]) {
            return Err(MartError::dataset(
                "query boundaries must be strictly increasing",
            ));
        }

        Ok(Dataset {
            features,
            labels,
            query_boundaries,
            layout: DataLayout::Horizontal,
        })
    }

    /// Number of instances.
    pub fn num_instances(&self) -> usize {
        match self.layout {
            DataLayout::Horizontal => self.features.nrows(),
            DataLayout::Vertical => self.features.ncols(),
        }
    }

    /// Number of features.
    pub fn num_features(&self) -> usize {
        match self.layout {
            DataLayout::Horizontal => self.features.ncols(),
            DataLayout::Vertical => self.features.nrows(),
        }
    }

    /// Current memory layout.
    pub fn layout(&self) -> DataLayout {
        self.layout
    }

    /// Transpose the feature matrix, flipping between layouts. The result is
    /// rebuilt in standard (contiguous) order so that the major axis can be
    /// sliced without copies.
    pub fn transpose(&mut self) {
        let transposed = self.features.t().as_standard_layout().into_owned();
        self.features = transposed;
        self.layout = match self.layout {
            DataLayout::Horizontal => DataLayout::Vertical,
            DataLayout::Vertical => DataLayout::Horizontal,
        };
    }

    /// Transpose into vertical layout if not already there.
    pub fn ensure_vertical(&mut self) {
        if self.layout != DataLayout::Vertical {
            self.transpose();
        }
    }

    /// Contiguous view of one feature across all instances.
    ///
    /// Requires vertical layout; call [`Dataset::ensure_vertical`] first.
    pub fn feature_column(&self, feature: usize) -> Result<ArrayView1<'_, Feature>> {
        if self.layout != DataLayout::Vertical {
            return Err(MartError::dataset(
                "feature column access requires vertical layout",
            ));
        }
        if feature >= self.num_features() {
            return Err(MartError::dataset(format!(
                "feature index {} out of range ({} features)",
                feature,
                self.num_features()
            )));
        }
        Ok(self.features.row(feature))
    }

    /// View of one instance's feature vector, valid in either layout.
    ///
    /// # Panics
    ///
    /// Panics if `instance >= num_instances()`.
    pub fn instance(&self, instance: usize) -> ArrayView1<'_, Feature> {
        match self.layout {
            DataLayout::Horizontal => self.features.row(instance),
            DataLayout::Vertical => self.features.column(instance),
        }
    }

    /// Relevance label of one instance.
    ///
    /// # Panics
    ///
    /// Panics if `instance >= num_instances()`.
    pub fn label(&self, instance: usize) -> Label {
        self.labels[instance]
    }

    /// All labels, in instance order.
    pub fn labels(&self) -> ArrayView1<'_, Label> {
        self.labels.view()
    }

    /// Number of queries.
    pub fn num_queries(&self) -> usize {
        self.query_boundaries.len() - 1
    }

    /// Instance index range of one query.
    ///
    /// # Panics
    ///
    /// Panics if `query >= num_queries()`.
    pub fn query_range(&self, query: usize) -> Range<usize> {
        self.query_boundaries[query]..self.query_boundaries[query + 1]
    }
}
