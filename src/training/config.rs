//! Training configuration.
//!
//! [`BoostConfig`] is the validated, typed configuration used by
//! [`GentleBoostTrainer`](super::GentleBoostTrainer). It uses the `bon` crate
//! for builder generation with validation at build time.
//!
//! [`RawOptions`] mirrors the option bundle a host environment hands over as
//! raw numerics. Resolving it clamps out-of-range values to documented
//! defaults and returns the applied [`ConfigWarning`]s so the caller can
//! surface them; the typed builder instead rejects invalid values outright.
//!
//! # Example
//!
//! ```
//! use gentleboost::{BoostConfig, LearnerKind};
//!
//! // All defaults
//! let config = BoostConfig::builder().build().unwrap();
//! assert_eq!(config.n_rounds, 100);
//!
//! // Customize the strategy and budget
//! let config = BoostConfig::builder()
//!     .learner(LearnerKind::Perceptron)
//!     .n_rounds(50)
//!     .max_ite(20)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.max_ite, 20);
//! ```

use bon::Builder;

use super::logger::{TrainingLogger, Verbosity};
use crate::model::LearnerKind;

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Number of boosting rounds must be at least 1.
    InvalidNRounds,
    /// Perceptron learning rate must be positive and finite.
    InvalidLambda(f64),
    /// Perceptron iteration budget must be at least 1.
    InvalidMaxIte,
    /// Sigmoid sharpness must be positive and finite.
    InvalidEpsi(f64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNRounds => write!(f, "n_rounds must be at least 1"),
            Self::InvalidLambda(v) => {
                write!(f, "lambda must be positive and finite, got {}", v)
            }
            Self::InvalidMaxIte => write!(f, "max_ite must be at least 1"),
            Self::InvalidEpsi(v) => write!(f, "epsi must be positive and finite, got {}", v),
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// BoostConfig
// =============================================================================

/// Configuration for one boosting training run.
///
/// The builder validates at build time; see [`RawOptions`] for the
/// clamp-with-warning path used with unvalidated host input.
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct BoostConfig {
    /// Number of boosting rounds (weak learners to select). Default: 100.
    #[builder(default = 100)]
    pub n_rounds: u32,

    /// Weak-learner strategy, fixed for the whole run. Default: decision stump.
    #[builder(default)]
    pub learner: LearnerKind,

    /// Perceptron learning-rate scalar. Default: 1e-3.
    ///
    /// Only used by the perceptron strategy.
    #[builder(default = 1e-3)]
    pub lambda: f64,

    /// Perceptron iteration budget (full passes per feature fit). Default: 10.
    #[builder(default = 10)]
    pub max_ite: u32,

    /// Sigmoid sharpness scalar. Default: 1.0.
    #[builder(default = 1.0)]
    pub epsi: f64,

    /// Random seed for perceptron weight initialization. Default: 42.
    #[builder(default = 42)]
    pub seed: u64,

    /// Number of worker threads: 0 = all available cores, 1 = sequential.
    #[builder(default = 0)]
    pub n_threads: usize,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

/// Custom finishing function that validates the config.
impl<S: boost_config_builder::IsComplete> BoostConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is invalid:
    /// - `n_rounds == 0`
    /// - `lambda <= 0` or non-finite
    /// - `max_ite == 0`
    /// - `epsi <= 0` or non-finite
    pub fn build(self) -> Result<BoostConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl BoostConfig {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.n_rounds == 0 {
            return Err(ConfigError::InvalidNRounds);
        }
        if !(self.lambda.is_finite() && self.lambda > 0.0) {
            return Err(ConfigError::InvalidLambda(self.lambda));
        }
        if self.max_ite == 0 {
            return Err(ConfigError::InvalidMaxIte);
        }
        if !(self.epsi.is_finite() && self.epsi > 0.0) {
            return Err(ConfigError::InvalidEpsi(self.epsi));
        }
        Ok(())
    }
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self::builder().build().expect("default config is valid")
    }
}

// =============================================================================
// RawOptions
// =============================================================================

/// A warning produced when a raw host option was clamped to its default.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// `n_rounds` was non-positive; forced to 100.
    NRoundsClamped { requested: i64 },
    /// `weak_learner` was outside {0, 1}; forced to 0 (decision stump).
    WeakLearnerClamped { requested: i64 },
    /// `lambda` was non-positive or non-finite; forced to 1e-3.
    LambdaClamped { requested: f64 },
    /// `max_ite` was non-positive; forced to 10.
    MaxIteClamped { requested: i64 },
    /// `epsi` was non-positive or non-finite; forced to 1.0.
    EpsiClamped { requested: f64 },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NRoundsClamped { requested } => {
                write!(f, "n_rounds must be > 0, got {}; forced to 100", requested)
            }
            Self::WeakLearnerClamped { requested } => {
                write!(
                    f,
                    "weak_learner must be 0 or 1, got {}; forced to 0",
                    requested
                )
            }
            Self::LambdaClamped { requested } => {
                write!(f, "lambda must be > 0, got {}; forced to 1e-3", requested)
            }
            Self::MaxIteClamped { requested } => {
                write!(f, "max_ite must be > 0, got {}; forced to 10", requested)
            }
            Self::EpsiClamped { requested } => {
                write!(f, "epsi must be > 0, got {}; forced to 1.0", requested)
            }
        }
    }
}

/// The training option bundle as a host environment supplies it: raw
/// numerics, unvalidated.
///
/// [`resolve`](Self::resolve) clamps out-of-range values to the documented
/// defaults and reports each clamp as a [`ConfigWarning`]. Options the host
/// contract doesn't carry (seed, verbosity) resolve to their defaults.
#[derive(Debug, Clone)]
pub struct RawOptions {
    /// Weak-learner count. Default 100; non-positive values are clamped.
    pub n_rounds: i64,
    /// 0 = decision stump, 1 = perceptron/sigmoid. Default 0.
    pub weak_learner: i64,
    /// Perceptron learning rate. Default 1e-3.
    pub lambda: f64,
    /// Perceptron iteration budget. Default 10.
    pub max_ite: i64,
    /// Sigmoid sharpness. Default 1.0.
    pub epsi: f64,
    /// Worker threads; -1 or 0 means all available cores.
    pub n_threads: i64,
}

impl Default for RawOptions {
    fn default() -> Self {
        Self {
            n_rounds: 100,
            weak_learner: 0,
            lambda: 1e-3,
            max_ite: 10,
            epsi: 1.0,
            n_threads: -1,
        }
    }
}

impl RawOptions {
    /// Clamp out-of-range options to their defaults and build the validated
    /// configuration.
    ///
    /// Every clamp is printed to stderr and reported in the returned warning
    /// list, so a clamp is never silent even when the caller drops the list.
    pub fn resolve(&self) -> (BoostConfig, Vec<ConfigWarning>) {
        let mut warnings = Vec::new();

        let n_rounds = if self.n_rounds <= 0 {
            warnings.push(ConfigWarning::NRoundsClamped {
                requested: self.n_rounds,
            });
            100
        } else {
            self.n_rounds as u32
        };

        let learner = match self.weak_learner {
            0 => LearnerKind::DecisionStump,
            1 => LearnerKind::Perceptron,
            other => {
                warnings.push(ConfigWarning::WeakLearnerClamped { requested: other });
                LearnerKind::DecisionStump
            }
        };

        let lambda = if self.lambda.is_finite() && self.lambda > 0.0 {
            self.lambda
        } else {
            warnings.push(ConfigWarning::LambdaClamped {
                requested: self.lambda,
            });
            1e-3
        };

        let max_ite = if self.max_ite <= 0 {
            warnings.push(ConfigWarning::MaxIteClamped {
                requested: self.max_ite,
            });
            10
        } else {
            self.max_ite as u32
        };

        let epsi = if self.epsi.is_finite() && self.epsi > 0.0 {
            self.epsi
        } else {
            warnings.push(ConfigWarning::EpsiClamped {
                requested: self.epsi,
            });
            1.0
        };

        let n_threads = if self.n_threads <= 0 {
            0
        } else {
            self.n_threads as usize
        };

        let logger = TrainingLogger::new(Verbosity::Silent);
        for warning in &warnings {
            logger.log_warning(warning);
        }

        let config = BoostConfig::builder()
            .n_rounds(n_rounds)
            .learner(learner)
            .lambda(lambda)
            .max_ite(max_ite)
            .epsi(epsi)
            .n_threads(n_threads)
            .build()
            .expect("clamped options are valid");

        (config, warnings)
    }
}

// =============================================================================
// Tests
// =============================================================================
