//! The boosting driver.
//!
//! Orchestrates a training run: validate inputs, initialize uniform weights,
//! optionally warm-start from a prior stage's model, then run `n_rounds`
//! strictly sequential rounds. Each round fans the active search strategy out
//! over the eligible features, applies the multiplicative weight update for
//! the winning weak learner, and permanently retires the winning feature.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::{FeatureMatrix, Labels, SortedColumns};
use crate::model::{BoostModel, LearnerKind, WeakLearner};
use crate::utils::{run_with_threads, Parallelism};

use super::candidate::Candidate;
use super::config::BoostConfig;
use super::error::TrainError;
use super::logger::TrainingLogger;
use super::perceptron::{self, PerceptronParams};
use super::stump;
use super::weights::SampleWeights;

// =============================================================================
// Eligibility
// =============================================================================

/// The set of features still available for selection.
///
/// Owned by the driver and mutated only between rounds; the in-round searches
/// see it as a read-only mask. Shrinks monotonically: a feature selected in
/// any round (or consumed by a warm-start premodel) never comes back.
#[derive(Debug, Clone)]
pub(crate) struct Eligibility {
    mask: Vec<bool>,
    remaining: usize,
}

impl Eligibility {
    /// All `n_features` features eligible.
    pub fn all(n_features: usize) -> Self {
        Self {
            mask: vec![true; n_features],
            remaining: n_features,
        }
    }

    /// Retire a feature. Idempotent.
    pub fn remove(&mut self, feature: usize) {
        if self.mask[feature] {
            self.mask[feature] = false;
            self.remaining -= 1;
        }
    }

    /// Number of features still eligible.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Read-only view for the in-round searches.
    #[inline]
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }
}

// =============================================================================
// GentleBoostTrainer
// =============================================================================

/// GentleBoost trainer for binary classifiers.
///
/// # Example
///
/// ```
/// use gentleboost::{BoostConfig, FeatureMatrix, GentleBoostTrainer, Labels};
/// use ndarray::array;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let matrix = FeatureMatrix::from_features_major(
///     array![[10u8, 20, 30, 40], [3, 9, 1, 7]].view(),
/// );
/// let labels = Labels::new(&[-1, -1, 1, 1])?;
///
/// let config = BoostConfig::builder().n_rounds(2).build()?;
/// let model = GentleBoostTrainer::new(config).train(&matrix, &labels, None)?;
///
/// let params = model.to_param_array(); // 4 x T, one column per round
/// assert_eq!(params.ncols(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GentleBoostTrainer {
    config: BoostConfig,
}

impl GentleBoostTrainer {
    /// Create a trainer with the given configuration.
    pub fn new(config: BoostConfig) -> Self {
        Self { config }
    }

    /// The trainer's configuration.
    pub fn config(&self) -> &BoostConfig {
        &self.config
    }

    /// Train a model.
    ///
    /// Sets up the thread pool per `config.n_threads` (0 = all cores,
    /// 1 = sequential) and runs the boosting loop. The optional `premodel`
    /// only initializes the sample weights; its records are not re-emitted
    /// and its features are retired before round 1.
    ///
    /// # Errors
    ///
    /// See [`TrainError`]. No partial model is ever returned: requesting more
    /// rounds than there are eligible features fails up front.
    pub fn train(
        &self,
        matrix: &FeatureMatrix,
        labels: &Labels,
        premodel: Option<&BoostModel>,
    ) -> Result<BoostModel, TrainError> {
        run_with_threads(self.config.n_threads, |parallelism| {
            self.train_inner(matrix, labels, premodel, parallelism)
        })
    }

    /// Training loop proper (no thread-pool management).
    fn train_inner(
        &self,
        matrix: &FeatureMatrix,
        labels: &Labels,
        premodel: Option<&BoostModel>,
        parallelism: Parallelism,
    ) -> Result<BoostModel, TrainError> {
        let n_samples = matrix.n_samples();
        let n_features = matrix.n_features();

        if n_samples == 0 || n_features == 0 {
            return Err(TrainError::EmptyTrainingSet {
                n_samples,
                n_features,
            });
        }
        if labels.len() != n_samples {
            return Err(TrainError::SampleCountMismatch {
                labels: labels.len(),
                samples: n_samples,
            });
        }

        let y = labels.as_slice();
        let logger = TrainingLogger::new(self.config.verbosity);
        let mut weights = SampleWeights::uniform(n_samples);
        let mut eligibility = Eligibility::all(n_features);

        if let Some(premodel) = premodel {
            self.warm_start(premodel, matrix, y, &mut weights, &mut eligibility)?;
        }

        let n_rounds = self.config.n_rounds;
        if (eligibility.remaining() as u64) < u64::from(n_rounds) {
            return Err(TrainError::NotEnoughFeatures {
                requested: n_rounds,
                available: eligibility.remaining(),
            });
        }

        logger.start_training(n_rounds as usize, n_samples, n_features);
        let mut learners: Vec<WeakLearner> = Vec::with_capacity(n_rounds as usize);

        match self.config.learner {
            LearnerKind::DecisionStump => {
                let sorted = SortedColumns::build(matrix, parallelism);
                for round in 0..n_rounds {
                    let candidate = stump::search_round(
                        &sorted,
                        y,
                        weights.as_slice(),
                        eligibility.mask(),
                        parallelism,
                    )
                    .ok_or(TrainError::NotEnoughFeatures {
                        requested: n_rounds,
                        available: eligibility.remaining(),
                    })?;

                    let learner = self.commit_round(
                        candidate,
                        matrix,
                        y,
                        &mut weights,
                        &mut eligibility,
                    );
                    logger.log_round(round as usize, learner.feature, candidate.error);
                    learners.push(learner);
                }
            }
            LearnerKind::Perceptron => {
                let mut rng = StdRng::seed_from_u64(self.config.seed);
                let params = PerceptronParams {
                    lambda: self.config.lambda,
                    epsi: self.config.epsi,
                    max_ite: self.config.max_ite,
                };
                for round in 0..n_rounds {
                    let candidate = perceptron::search_round(
                        matrix,
                        y,
                        weights.as_slice(),
                        eligibility.mask(),
                        params,
                        &mut rng,
                        parallelism,
                    )
                    .ok_or(TrainError::NotEnoughFeatures {
                        requested: n_rounds,
                        available: eligibility.remaining(),
                    })?;

                    let learner = self.commit_round(
                        candidate,
                        matrix,
                        y,
                        &mut weights,
                        &mut eligibility,
                    );
                    logger.log_round(round as usize, learner.feature, candidate.error);
                    learners.push(learner);
                }
            }
        }

        logger.finish_training(n_rounds as usize);
        Ok(BoostModel::from_parts(
            self.config.learner,
            self.config.epsi,
            learners,
        ))
    }

    /// Initialize the weights from a prior stage's model.
    ///
    /// Purely a weight-initialization step: records are validated but never
    /// mutated or re-derived. Each premodel feature is retired so it cannot
    /// be selected again in this stage.
    fn warm_start(
        &self,
        premodel: &BoostModel,
        matrix: &FeatureMatrix,
        labels: &[i8],
        weights: &mut SampleWeights,
        eligibility: &mut Eligibility,
    ) -> Result<(), TrainError> {
        if premodel.kind() != self.config.learner {
            return Err(TrainError::PremodelKindMismatch {
                premodel: premodel.kind(),
                configured: self.config.learner,
            });
        }

        let n_features = matrix.n_features();
        for (entry, learner) in premodel.learners().iter().enumerate() {
            if learner.feature >= n_features {
                return Err(TrainError::PremodelFeatureOutOfRange {
                    entry,
                    feature: learner.feature,
                    n_features,
                });
            }

            let column = matrix.feature(learner.feature);
            match self.config.learner {
                LearnerKind::DecisionStump => {
                    weights.apply_update(labels, |i| learner.stump_response(column[i]));
                }
                LearnerKind::Perceptron => {
                    weights.apply_update(labels, |i| {
                        learner.sigmoid_response(column[i], self.config.epsi)
                    });
                }
            }
            eligibility.remove(learner.feature);
        }
        Ok(())
    }

    /// Turn the round winner into a record: update weights with its response
    /// and retire its feature.
    fn commit_round(
        &self,
        candidate: Candidate,
        matrix: &FeatureMatrix,
        labels: &[i8],
        weights: &mut SampleWeights,
        eligibility: &mut Eligibility,
    ) -> WeakLearner {
        let learner = WeakLearner {
            feature: candidate.feature,
            threshold: candidate.threshold,
            a: candidate.a,
            b: candidate.b,
        };

        let column = matrix.feature(learner.feature);
        match self.config.learner {
            LearnerKind::DecisionStump => {
                weights.apply_update(labels, |i| learner.stump_response(column[i]));
            }
            LearnerKind::Perceptron => {
                weights.apply_update(labels, |i| {
                    learner.sigmoid_response(column[i], self.config.epsi)
                });
            }
        }

        eligibility.remove(learner.feature);
        learner
    }
}
