//! MART boosting driver.
//!
//! Orchestrates the training loop: per-round pseudo-response recomputation,
//! delegation to the external tree learner, ensemble accumulation,
//! incremental model-score updates, metric evaluation, early stopping, and
//! the validation rollback at finalization.
//!
//! Initialization (sorted indices and thresholds) runs as a parallel map
//! over features; the rounds themselves are strictly sequential because each
//! round's residuals depend on the previous round's model scores.

use crate::boosting::early_stopping::ValidationTracker;
use crate::boosting::ensemble::Ensemble;
use crate::boosting::observer::TrainingObserver;
use crate::config::MartConfig;
use crate::core::error::Result;
use crate::core::traits::{Metric, RegressionTree, TreeLearnerContext, TreeLearnerFactory};
use crate::core::types::{Label, MetricScore, Score};
use crate::dataset::dataset::Dataset;
use crate::dataset::sorted_index::SortedIndexTable;
use crate::dataset::thresholds::ThresholdTable;
use crate::io::{ModelHeader, ModelSink};
use ndarray::ArrayView1;

/// Summary of a finished training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    /// Number of boosting rounds actually run.
    pub rounds_run: usize,
    /// Number of trees kept after any rollback.
    pub ensemble_len: usize,
    /// Round of the best validation metric, if a validation set was used
    /// and a best was recorded.
    pub best_round: Option<usize>,
    /// Final training metric on the kept ensemble.
    pub training_metric: MetricScore,
    /// Final validation metric on the kept ensemble, if a validation set
    /// was used.
    pub validation_metric: Option<MetricScore>,
}

/// MART learner: gradient boosting with regression trees over query-grouped
/// ranking data.
#[derive(Debug, Clone)]
pub struct MartRanker {
    config: MartConfig,
}

impl MartRanker {
    /// Create a learner from a validated configuration.
    pub fn new(config: MartConfig) -> Result<Self> {
        config.validate()?;
        Ok(MartRanker { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &MartConfig {
        &self.config
    }

    /// The textual model header for this configuration.
    pub fn header(&self) -> ModelHeader {
        ModelHeader::from_config(&self.config)
    }

    /// Run the full training loop and return the fitted ensemble with a
    /// report.
    ///
    /// Both datasets are transposed to vertical layout if needed. When
    /// `validation` is `None`, early stopping and rollback are skipped and
    /// training runs the full configured number of rounds. Tree-fit and
    /// metric failures abort training; checkpoint and final-save failures
    /// are logged and swallowed.
    pub fn learn(
        &self,
        training: &mut Dataset,
        mut validation: Option<&mut Dataset>,
        scorer: &dyn Metric,
        learner_factory: &dyn TreeLearnerFactory,
        sink: &mut dyn ModelSink,
        observer: &mut dyn TrainingObserver,
    ) -> Result<(Ensemble, TrainingReport)> {
        // ---------- Initialization ----------
        training.ensure_vertical();
        if let Some(valid) = validation.as_deref_mut() {
            valid.ensure_vertical();
        }

        let num_instances = training.num_instances();
        let sorted_indices = SortedIndexTable::build(training)?;
        let thresholds =
            ThresholdTable::build(training, &sorted_indices, self.config.num_thresholds)?;

        let mut learner = learner_factory.create(TreeLearnerContext {
            dataset: training,
            sorted_indices: &sorted_indices,
            thresholds: &thresholds,
            min_leaf_support: self.config.min_leaf_support,
            max_leaves: self.config.num_leaves,
        })?;

        let mut training_scores = vec![0.0 as Score; num_instances];
        let mut pseudoresponses = vec![0.0 as Score; num_instances];
        let mut validation_scores = validation
            .as_deref()
            .map(|valid| vec![0.0 as Score; valid.num_instances()]);

        observer.on_init_complete(num_instances, training.num_features());

        // ---------- Training ----------
        let mut ensemble = Ensemble::with_capacity(self.config.num_trees);
        let mut tracker = ValidationTracker::new();
        let window = self.config.early_stopping_rounds;
        let mut round = 0;

        while round < self.config.num_trees
            && (window == 0
                || validation.is_none()
                || round <= tracker.best_round().unwrap_or(0) + window)
        {
            compute_pseudoresponses(
                training.labels(),
                &training_scores,
                &mut pseudoresponses,
            );

            learner.refresh(&pseudoresponses)?;
            let mut tree = learner.fit(&pseudoresponses)?;
            tree.refine_leaf_outputs(&pseudoresponses)?;

            update_model_scores(
                training,
                &mut training_scores,
                tree.as_ref(),
                self.config.shrinkage,
            );
            if let (Some(valid), Some(scores)) =
                (validation.as_deref(), validation_scores.as_mut())
            {
                update_model_scores(valid, scores, tree.as_ref(), self.config.shrinkage);
            }

            ensemble.push(tree, self.config.shrinkage)?;

            let training_metric = scorer.evaluate(training, &training_scores)?;
            let mut validation_metric = None;
            let mut improved = false;
            if let (Some(valid), Some(scores)) =
                (validation.as_deref(), validation_scores.as_ref())
            {
                let metric = scorer.evaluate(valid, scores)?;
                improved = tracker.observe(round, metric);
                validation_metric = Some(metric);
            }
            observer.on_round(round, training_metric, validation_metric, improved);

            if self.config.checkpoint_interval != 0
                && (round + 1) % self.config.checkpoint_interval == 0
            {
                match sink.checkpoint(&ensemble, round + 1) {
                    Ok(()) => observer.on_checkpoint(round + 1),
                    Err(err) => {
                        log::warn!("checkpoint at round {} failed: {}", round + 1, err)
                    }
                }
            }

            round += 1;
        }

        // ---------- Finalization ----------
        let best_round = if validation.is_some() {
            let best = tracker.best_round().unwrap_or(0);
            let keep = best + 1;
            if ensemble.len() > keep {
                ensemble.truncate(keep)?;
            }
            Some(best)
        } else {
            None
        };

        ensemble.score_dataset(training, &mut training_scores)?;
        let training_metric = scorer.evaluate(training, &training_scores)?;
        let validation_metric = match (validation.as_deref(), validation_scores.as_mut()) {
            (Some(valid), Some(scores)) => {
                ensemble.score_dataset(valid, scores)?;
                Some(scorer.evaluate(valid, scores)?)
            }
            _ => None,
        };

        let report = TrainingReport {
            rounds_run: round,
            ensemble_len: ensemble.len(),
            best_round,
            training_metric,
            validation_metric,
        };
        observer.on_training_complete(&report);

        if let Err(err) = sink.save(&ensemble, &self.header()) {
            log::warn!("final model save failed: {}", err);
        }

        Ok((ensemble, report))
    }
}

/// Recompute the pseudo-residual for every instance:
/// `pseudoresponses[i] = labels[i] - scores[i]`.
///
/// Fully rederived each round (not incrementally maintained) because every
/// instance's model score moves between rounds; stale values are always
/// overwritten before use.
pub(crate) fn compute_pseudoresponses(
    labels: ArrayView1<'_, Label>,
    scores: &[Score],
    pseudoresponses: &mut [Score],
) {
    for ((out, &label), &score) in pseudoresponses.iter_mut().zip(labels.iter()).zip(scores) {
        *out = label - score;
    }
}

/// Fold one tree's predictions into the model scores, query by query:
/// `scores[i] += shrinkage * tree.evaluate(instance i)`.
fn update_model_scores(
    dataset: &Dataset,
    scores: &mut [Score],
    tree: &dyn RegressionTree,
    shrinkage: f32,
) {
    for query in 0..dataset.num_queries() {
        for i in dataset.query_range(query) {
            scores[i] += shrinkage as Score * tree.evaluate(dataset.instance(i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_pseudoresponses_identity() {
        let labels = array![3.0, 2.0, 1.0, 0.0];
        let scores = vec![0.5, 0.0, -0.25, 2.0];
        let mut out = vec![9.0; 4];
        compute_pseudoresponses(labels.view(), &scores, &mut out);
        for i in 0..4 {
            assert_eq!(out[i], labels[i] - scores[i]);
        }
    }

    #[test]
    fn test_pseudoresponses_overwrite_stale_values() {
        let labels = array![1.0, 1.0];
        let mut out = vec![123.0, -456.0];
        compute_pseudoresponses(labels.view(), &[0.0, 0.0], &mut out);
        assert_eq!(out, vec![1.0, 1.0]);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = MartConfig::default();
        config.shrinkage = -1.0;
        assert!(MartRanker::new(config).is_err());
    }
}
