//! Core data types for the MART training core.
//!
//! These aliases pin down the numeric widths used throughout training:
//! feature values are kept at 32 bits (they are read once per split search
//! and dominate memory), while model scores and pseudo-responses accumulate
//! across rounds and therefore use 64 bits.

/// Raw feature value type. 32-bit float, matching the on-disk feature width.
pub type Feature = f32;

/// Relevance label type.
pub type Label = f64;

/// Model score and pseudo-response type. 64-bit to keep the additive
/// accumulation across boosting rounds numerically stable.
pub type Score = f64;

/// Value returned by an evaluation metric; higher is better.
pub type MetricScore = f64;

/// Boosting round index.
pub type IterationIndex = usize;

/// Instance index inside the per-feature sorted permutations. 32-bit keeps
/// the F x N index table at half the size of `usize` on 64-bit targets.
pub type InstanceId = u32;
