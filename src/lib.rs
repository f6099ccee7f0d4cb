//! gentleboost: GentleBoost training for binary classifiers.
//!
//! Trains an additive ensemble of weak learners over byte-quantized feature
//! matrices. Each boosting round selects one weak learner from a pool of
//! not-yet-used features, then reweights the samples multiplicatively.
//!
//! # Key Types
//!
//! - [`GentleBoostTrainer`] - The boosting driver with a `train` entry point
//! - [`BoostConfig`] / [`RawOptions`] - Configuration builder and host-option clamping
//! - [`BoostModel`] / [`WeakLearner`] - The trained ensemble and its records
//! - [`FeatureMatrix`] / [`Labels`] - Input data handling
//!
//! # Weak learners
//!
//! Two interchangeable strategies, fixed for a whole training run:
//!
//! - [`LearnerKind::DecisionStump`]: per round, an exact weighted-squared-error
//!   minimization over every (feature, threshold) candidate, using pre-sorted
//!   columns and incremental running sums.
//! - [`LearnerKind::Perceptron`]: per round, a fixed-iteration gradient fit of
//!   an affine-plus-bounded-sigmoid response per feature.
//!
//! # Example
//!
//! ```
//! use gentleboost::{BoostConfig, FeatureMatrix, GentleBoostTrainer, Labels};
//! use ndarray::array;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Feature-major input: 1 feature, 4 samples.
//! let features = array![[10u8, 20, 30, 40]];
//! let matrix = FeatureMatrix::from_features_major(features.view());
//! let labels = Labels::new(&[-1, -1, 1, 1])?;
//!
//! let config = BoostConfig::builder().n_rounds(1).build()?;
//! let model = GentleBoostTrainer::new(config).train(&matrix, &labels, None)?;
//!
//! assert_eq!(model.n_learners(), 1);
//! # Ok(())
//! # }
//! ```

// Re-export approx traits for users who want to compare model parameters
pub use approx;

pub mod data;
pub mod model;
pub mod training;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Data types (for preparing training data)
pub use data::{FeatureMatrix, LabelError, Labels, SortedColumns};

// Model types
pub use model::{BoostModel, LearnerKind, ModelError, WeakLearner};

// Training types
pub use training::{
    BoostConfig, ConfigError, ConfigWarning, GentleBoostTrainer, RawOptions, TrainError,
    TrainingLogger, Verbosity,
};

// Shared utilities
pub use utils::{run_with_threads, Parallelism};
