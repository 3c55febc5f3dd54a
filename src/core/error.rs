//! Error handling and error types for the MART training core.
//!
//! All fallible operations in the crate return [`Result`], with [`MartError`]
//! covering configuration rejection, dataset validation, training failures,
//! and internal invariant violations.

use std::io;
use thiserror::Error;

/// Main error type for the MART training core.
#[derive(Error, Debug)]
pub enum MartError {
    /// Configuration and validation errors, rejected before training starts
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Dataset-related errors (layout, grouping, dimensions)
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    /// Training-related errors
    #[error("Training error: {message}")]
    Training { message: String },

    /// Errors reported by the external tree-fitting component
    #[error("Tree construction error: {message}")]
    TreeConstruction { message: String },

    /// Errors reported by the evaluation metric
    #[error("Metric error: {message}")]
    Metric { message: String },

    /// Model persistence errors (checkpoint or final save)
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// Dimension mismatch errors
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// File I/O errors
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[from]
        source: io::Error,
    },

    /// Internal invariant violations (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl MartError {
    /// Create a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        MartError::Config {
            message: message.into(),
        }
    }

    /// Create a dataset error.
    pub fn dataset<S: Into<String>>(message: S) -> Self {
        MartError::Dataset {
            message: message.into(),
        }
    }

    /// Create a training error.
    pub fn training<S: Into<String>>(message: S) -> Self {
        MartError::Training {
            message: message.into(),
        }
    }

    /// Create a tree construction error.
    pub fn tree<S: Into<String>>(message: S) -> Self {
        MartError::TreeConstruction {
            message: message.into(),
        }
    }

    /// Create a metric error.
    pub fn metric<S: Into<String>>(message: S) -> Self {
        MartError::Metric {
            message: message.into(),
        }
    }

    /// Create a persistence error.
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        MartError::Persistence {
            message: message.into(),
        }
    }

    /// Create a dimension mismatch error.
    pub fn dimension_mismatch<S: Into<String>, T: Into<String>>(expected: S, actual: T) -> Self {
        MartError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an internal error.
    pub fn internal<S: Into<String>>(message: S) -> Self {
        MartError::Internal {
            message: message.into(),
        }
    }

    /// Category name of this error, for reporting.
    pub fn category(&self) -> &'static str {
        match self {
            MartError::Config { .. } => "config",
            MartError::Dataset { .. } => "dataset",
            MartError::Training { .. } => "training",
            MartError::TreeConstruction { .. } => "tree",
            MartError::Metric { .. } => "metric",
            MartError::Persistence { .. } => "persistence",
            MartError::DimensionMismatch { .. } => "dimension",
            MartError::Io { .. } => "io",
            MartError::Internal { .. } => "internal",
        }
    }

    /// Whether training may continue after this error. Only persistence
    /// failures are recoverable; everything else invalidates the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MartError::Persistence { .. } | MartError::Io { .. })
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MartError>;
