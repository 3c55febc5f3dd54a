//! Shared low-level utilities.

pub mod qsort;
