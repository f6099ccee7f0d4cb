//! Sample-weight engine.
//!
//! Maintains the per-sample weight vector across boosting rounds. Both
//! weak-learner strategies and the warm-start path share this update:
//! multiply each weight by `exp(-y * h(x))`, then renormalize to unit sum.

/// Floor added to the weight sum before renormalizing.
///
/// Guards the degenerate case where every weight collapses to ~0; by
/// contract this is handled numerically, not reported as an error.
const SUM_FLOOR: f64 = 1e-15;

/// The per-sample weight vector.
///
/// Created once at uniform `1/N`, mutated in place by every update, and
/// dropped when training finishes. Outside the degenerate all-collapsed
/// case, the weights sum to 1 after every update.
#[derive(Debug, Clone)]
pub(crate) struct SampleWeights {
    w: Vec<f64>,
}

impl SampleWeights {
    /// Uniform weights `1/n` for `n` samples.
    pub fn uniform(n: usize) -> Self {
        Self {
            w: vec![1.0 / n as f64; n],
        }
    }

    /// Apply one boosting update for the response function `h`.
    ///
    /// `w[i] *= exp(-y[i] * h(i))` for every sample, then `w[i] /= (sum + eps)`.
    pub fn apply_update<F>(&mut self, labels: &[i8], response: F)
    where
        F: Fn(usize) -> f64,
    {
        debug_assert_eq!(self.w.len(), labels.len());

        let mut sum = 0.0;
        for (i, w) in self.w.iter_mut().enumerate() {
            *w *= (-f64::from(labels[i]) * response(i)).exp();
            sum += *w;
        }

        let inv = 1.0 / (sum + SUM_FLOOR);
        for w in self.w.iter_mut() {
            *w *= inv;
        }
    }

    /// The current weights.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn uniform_weights_sum_to_one() {
        for n in [1usize, 2, 7, 100] {
            let weights = SampleWeights::uniform(n);
            let sum: f64 = weights.as_slice().iter().sum();
            assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn update_keeps_unit_sum() {
        let labels = [1i8, -1, 1, -1, 1];
        let mut weights = SampleWeights::uniform(labels.len());

        // A few rounds of arbitrary responses.
        for round in 0..4 {
            weights.apply_update(&labels, |i| (i as f64 - round as f64) * 0.3);
            let sum: f64 = weights.as_slice().iter().sum();
            assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn update_upweights_misclassified_samples() {
        let labels = [1i8, -1];
        let mut weights = SampleWeights::uniform(2);

        // Response +1 everywhere: sample 1 (y = -1) is wrong and gains mass.
        weights.apply_update(&labels, |_| 1.0);
        let w = weights.as_slice();
        assert!(w[1] > w[0]);
        assert_abs_diff_eq!(w[0] + w[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn single_sample_stays_at_one() {
        let mut weights = SampleWeights::uniform(1);
        weights.apply_update(&[1], |_| 0.7);
        assert_abs_diff_eq!(weights.as_slice()[0], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn collapsed_weights_stay_finite() {
        let labels = [1i8, 1];
        let mut weights = SampleWeights::uniform(2);

        // A response large enough to underflow every weight to zero. The sum
        // floor keeps the renormalization finite instead of dividing by zero.
        weights.apply_update(&labels, |_| 1e4);
        for &w in weights.as_slice() {
            assert!(w.is_finite());
        }
    }
}
