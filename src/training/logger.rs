//! Training progress logging.

use std::fmt::Display;

/// How much progress output training produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No progress output. Warnings are still printed.
    #[default]
    Silent,
    /// Start/finish summary lines.
    Info,
    /// Per-round selection details.
    Debug,
}

/// Structured logging for the training loop.
///
/// Progress lines go to stdout and respect the configured [`Verbosity`];
/// warnings go to stderr regardless, so configuration clamps are never
/// silent.
#[derive(Clone, Debug)]
pub struct TrainingLogger {
    verbosity: Verbosity,
}

impl TrainingLogger {
    /// Create a logger with the given verbosity.
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Announce the start of a training run.
    pub fn start_training(&self, n_rounds: usize, n_samples: usize, n_features: usize) {
        if self.verbosity >= Verbosity::Info {
            println!(
                "[gentleboost] training {} rounds on {} samples x {} features",
                n_rounds, n_samples, n_features
            );
        }
    }

    /// Report one round's selection.
    pub fn log_round(&self, round: usize, feature: usize, error: f64) {
        if self.verbosity >= Verbosity::Debug {
            println!(
                "[gentleboost] round {:>4}: feature {} error {:.6e}",
                round, feature, error
            );
        }
    }

    /// Surface a warning. Printed at every verbosity level.
    pub fn log_warning(&self, warning: &dyn Display) {
        eprintln!("[gentleboost] warning: {}", warning);
    }

    /// Announce the end of a training run.
    pub fn finish_training(&self, n_rounds: usize) {
        if self.verbosity >= Verbosity::Info {
            println!("[gentleboost] finished {} rounds", n_rounds);
        }
    }
}
