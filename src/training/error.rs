//! Fatal training errors.

use thiserror::Error;

use crate::data::LabelError;
use crate::model::{LearnerKind, ModelError};

/// Errors that abort training before any output is produced.
///
/// Configuration-range problems are not represented here: they are either
/// rejected at config build time ([`ConfigError`](super::ConfigError)) or
/// clamped with warnings ([`RawOptions`](super::RawOptions)).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainError {
    #[error("training set is empty ({n_samples} samples x {n_features} features)")]
    EmptyTrainingSet {
        n_samples: usize,
        n_features: usize,
    },

    #[error("label count {labels} does not match sample count {samples}")]
    SampleCountMismatch { labels: usize, samples: usize },

    #[error(transparent)]
    Label(#[from] LabelError),

    #[error(transparent)]
    Premodel(#[from] ModelError),

    #[error("premodel entry {entry} references feature {feature}, but only {n_features} features exist")]
    PremodelFeatureOutOfRange {
        entry: usize,
        feature: usize,
        n_features: usize,
    },

    #[error("premodel was trained with {premodel:?} but the configured learner is {configured:?}")]
    PremodelKindMismatch {
        premodel: LearnerKind,
        configured: LearnerKind,
    },

    #[error("{requested} boosting rounds requested but only {available} features are eligible")]
    NotEnoughFeatures { requested: u32, available: usize },
}
