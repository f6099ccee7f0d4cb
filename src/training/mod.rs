//! Training infrastructure for the boosting loop.
//!
//! This module provides the types needed for training:
//!
//! ## Driver
//!
//! - [`GentleBoostTrainer`]: orchestrates warm start and the round loop
//! - [`BoostConfig`] / [`RawOptions`]: validated configuration and the
//!   clamp-with-warning front for raw host options
//!
//! ## Shared Infrastructure
//!
//! - [`TrainError`]: fatal input/configuration errors
//! - [`TrainingLogger`], [`Verbosity`]: structured progress output
//!
//! The per-round searches (decision stump, perceptron) and the sample-weight
//! engine are internal: they are driven exclusively by the trainer.

mod booster;
mod candidate;
mod config;
mod error;
mod logger;
mod perceptron;
mod stump;
mod weights;

pub use booster::GentleBoostTrainer;
pub use config::{BoostConfig, ConfigError, ConfigWarning, RawOptions};
pub use error::TrainError;
pub use logger::{TrainingLogger, Verbosity};
