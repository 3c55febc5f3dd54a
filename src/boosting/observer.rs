//! Training progress observation.
//!
//! The driver reports round results, new-best markers, and checkpoint events
//! through this trait instead of writing to an output stream itself, keeping
//! the algorithmic core free of console dependencies.

use crate::boosting::mart::TrainingReport;
use crate::core::types::{IterationIndex, MetricScore};

/// Callback surface invoked by the driver at well-defined points.
///
/// All methods have empty default bodies; implement only what you need.
pub trait TrainingObserver {
    /// Initialization (index and threshold preparation) finished.
    fn on_init_complete(&mut self, _num_instances: usize, _num_features: usize) {}

    /// A boosting round completed. `validation_metric` is `None` when no
    /// validation set was supplied; `improved` marks a new validation best.
    fn on_round(
        &mut self,
        _round: IterationIndex,
        _training_metric: MetricScore,
        _validation_metric: Option<MetricScore>,
        _improved: bool,
    ) {
    }

    /// A periodic checkpoint was written.
    fn on_checkpoint(&mut self, _round: IterationIndex) {}

    /// Training finished (after any rollback and final rescoring).
    fn on_training_complete(&mut self, _report: &TrainingReport) {}
}

/// Observer that reports through the `log` crate, mirroring the classic
/// per-iteration training table.
#[derive(Debug, Default)]
pub struct LogObserver;

impl TrainingObserver for LogObserver {
    fn on_init_complete(&mut self, num_instances: usize, num_features: usize) {
        log::info!(
            "initialization complete: {} instances, {} features",
            num_instances,
            num_features
        );
    }

    fn on_round(
        &mut self,
        round: IterationIndex,
        training_metric: MetricScore,
        validation_metric: Option<MetricScore>,
        improved: bool,
    ) {
        match validation_metric {
            Some(validation) => log::info!(
                "{:>7} {:>9.4} {:>9.4}{}",
                round + 1,
                training_metric,
                validation,
                if improved { " *" } else { "" }
            ),
            None => log::info!("{:>7} {:>9.4}", round + 1, training_metric),
        }
    }

    fn on_checkpoint(&mut self, round: IterationIndex) {
        log::info!("checkpoint saved at round {}", round);
    }

    fn on_training_complete(&mut self, report: &TrainingReport) {
        log::info!(
            "training complete: {} rounds, {} trees kept, training metric {:.4}",
            report.rounds_run,
            report.ensemble_len,
            report.training_metric
        );
        if let Some(validation) = report.validation_metric {
            log::info!("validation metric {:.4}", validation);
        }
    }
}

/// Observer that ignores every event.
#[derive(Debug, Default)]
pub struct NullObserver;

impl TrainingObserver for NullObserver {}
