//! Validation tracking for early stopping and rollback.
//!
//! Tracks the best validation metric seen and the round at which it
//! occurred. The driver stops training once a configured number of rounds
//! passes without improvement and rolls the ensemble back to the best round.

use crate::core::types::{IterationIndex, MetricScore};

/// Best-validation-metric tracker.
///
/// Boundary behavior: a metric of exactly
/// `0.0` observed while no best exists yet is conflated with "uninitialized"
/// and does not register as a best. A scorer that legitimately returns zero
/// every round therefore never produces a best marker.
#[derive(Debug, Clone, Default)]
pub struct ValidationTracker {
    best: Option<(MetricScore, IterationIndex)>,
}

impl ValidationTracker {
    /// Create a tracker with no best recorded.
    pub fn new() -> Self {
        ValidationTracker::default()
    }

    /// Record a round's validation metric. Returns whether this observation
    /// strictly improved on the best so far (or established the first best).
    pub fn observe(&mut self, round: IterationIndex, metric: MetricScore) -> bool {
        let improved = match self.best {
            Some((best, _)) => metric > best,
            None => metric != 0.0,
        };
        if improved {
            self.best = Some((metric, round));
        }
        improved
    }

    /// Best metric observed, if any.
    pub fn best_metric(&self) -> Option<MetricScore> {
        self.best.map(|(metric, _)| metric)
    }

    /// Round at which the best metric was observed, if any.
    pub fn best_round(&self) -> Option<IterationIndex> {
        self.best.map(|(_, round)| round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_nonzero_observation_is_best() {
        let mut tracker = ValidationTracker::new();
        assert!(tracker.observe(0, 0.42));
        assert_eq!(tracker.best_metric(), Some(0.42));
        assert_eq!(tracker.best_round(), Some(0));
    }

    #[test]
    fn test_only_strict_improvement_updates() {
        let mut tracker = ValidationTracker::new();
        tracker.observe(0, 0.5);
        assert!(!tracker.observe(1, 0.5));
        assert!(!tracker.observe(2, 0.4));
        assert_eq!(tracker.best_round(), Some(0));
        assert!(tracker.observe(3, 0.6));
        assert_eq!(tracker.best_round(), Some(3));
    }

    #[test]
    fn test_zero_bootstrap_never_registers() {
        let mut tracker = ValidationTracker::new();
        for round in 0..5 {
            assert!(!tracker.observe(round, 0.0));
        }
        assert_eq!(tracker.best_round(), None);
        // A later positive score still establishes the first best.
        assert!(tracker.observe(5, 0.01));
        assert_eq!(tracker.best_round(), Some(5));
    }

    #[test]
    fn test_negative_first_metric_registers() {
        let mut tracker = ValidationTracker::new();
        assert!(tracker.observe(0, -0.5));
        assert!(tracker.observe(1, -0.4));
        assert_eq!(tracker.best_metric(), Some(-0.4));
    }
}
