//! Trained model representation.
//!
//! A [`BoostModel`] is an ordered sequence of [`WeakLearner`] records, one per
//! boosting round, interpreted as the additive ensemble `F(x) = sum h_t(x)`.
//! The record order is provenance (round index); evaluation has no
//! cross-record dependency.
//!
//! Models cross the host boundary as a 4 x T parameter table with one column
//! per round and rows featureIdx / threshold / a / b, where `featureIdx` is
//! 1-based. [`BoostModel::to_param_array`] and [`BoostModel::from_param_array`]
//! convert between the two; the latter is also how warm-start premodels
//! supplied as raw tables enter training.

use ndarray::{Array2, ArrayView2};
use thiserror::Error;

/// Weak-learner strategy. Fixed for a whole training run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LearnerKind {
    /// Threshold split with affine response: `h(x) = a*[x > threshold] + b`.
    #[default]
    DecisionStump,
    /// Bounded-sigmoid response: `h(x) = 2/(1+exp(-2*epsi*(a*x+b))) - 1`.
    Perceptron,
}

/// One weak learner: the record emitted by a single boosting round.
///
/// `feature` is 0-based here; the exported parameter table uses 1-based
/// indices. `threshold` is 0.0 for perceptron learners, which don't cut.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeakLearner {
    /// Index of the feature this learner reads.
    pub feature: usize,
    /// Cut point for the stump response; unused (0.0) for perceptrons.
    pub threshold: f64,
    /// Affine slope.
    pub a: f64,
    /// Affine bias.
    pub b: f64,
}

impl WeakLearner {
    /// Decision-stump response: `a*[x > threshold] + b`.
    #[inline]
    pub fn stump_response(&self, x: u8) -> f64 {
        if f64::from(x) > self.threshold {
            self.a + self.b
        } else {
            self.b
        }
    }

    /// Perceptron response: the bounded sigmoid of `a*x + b`.
    #[inline]
    pub fn sigmoid_response(&self, x: u8, epsi: f64) -> f64 {
        bounded_sigmoid(self.a * f64::from(x) + self.b, epsi)
    }
}

/// Sigmoid squashed into (-1, 1): `2/(1+exp(-2*epsi*z)) - 1`.
#[inline]
pub fn bounded_sigmoid(z: f64, epsi: f64) -> f64 {
    2.0 / (1.0 + (-2.0 * epsi * z).exp()) - 1.0
}

/// Errors raised when importing a model from a raw parameter table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("parameter table must have 4 rows (featureIdx, threshold, a, b), got {got}")]
    ParamRows { got: usize },

    #[error("parameter table column {column} has feature index {value}, expected an integer >= 1")]
    InvalidFeatureIndex { column: usize, value: f64 },
}

/// A trained ensemble: one [`WeakLearner`] per boosting round.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoostModel {
    kind: LearnerKind,
    /// Sigmoid sharpness the perceptron responses were trained with.
    epsi: f64,
    learners: Vec<WeakLearner>,
}

impl BoostModel {
    /// Assemble a model from its parts.
    pub fn from_parts(kind: LearnerKind, epsi: f64, learners: Vec<WeakLearner>) -> Self {
        Self {
            kind,
            epsi,
            learners,
        }
    }

    /// Import a model from a 4 x T parameter table (1-based feature row).
    ///
    /// # Errors
    ///
    /// [`ModelError::ParamRows`] if the table does not have exactly 4 rows,
    /// [`ModelError::InvalidFeatureIndex`] if a feature entry is not an
    /// integer >= 1.
    pub fn from_param_array(
        kind: LearnerKind,
        epsi: f64,
        params: ArrayView2<f64>,
    ) -> Result<Self, ModelError> {
        if params.nrows() != 4 {
            return Err(ModelError::ParamRows {
                got: params.nrows(),
            });
        }

        let mut learners = Vec::with_capacity(params.ncols());
        for (column, record) in params.columns().into_iter().enumerate() {
            let raw = record[0];
            if !raw.is_finite() || raw.fract() != 0.0 || raw < 1.0 {
                return Err(ModelError::InvalidFeatureIndex { column, value: raw });
            }
            learners.push(WeakLearner {
                feature: raw as usize - 1,
                threshold: record[1],
                a: record[2],
                b: record[3],
            });
        }

        Ok(Self {
            kind,
            epsi,
            learners,
        })
    }

    /// Export the 4 x T parameter table (1-based feature row, round order).
    pub fn to_param_array(&self) -> Array2<f64> {
        let mut params = Array2::zeros((4, self.learners.len()));
        for (t, learner) in self.learners.iter().enumerate() {
            params[[0, t]] = (learner.feature + 1) as f64;
            params[[1, t]] = learner.threshold;
            params[[2, t]] = learner.a;
            params[[3, t]] = learner.b;
        }
        params
    }

    /// The weak-learner strategy this model was trained with.
    #[inline]
    pub fn kind(&self) -> LearnerKind {
        self.kind
    }

    /// Sigmoid sharpness parameter (only meaningful for perceptron models).
    #[inline]
    pub fn epsi(&self) -> f64 {
        self.epsi
    }

    /// The weak learners, in round order.
    #[inline]
    pub fn learners(&self) -> &[WeakLearner] {
        &self.learners
    }

    /// Number of weak learners.
    #[inline]
    pub fn n_learners(&self) -> usize {
        self.learners.len()
    }

    /// Whether the model holds no learners.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.learners.is_empty()
    }

    /// Evaluate one learner's response on a feature value, using this model's
    /// strategy and sharpness.
    #[inline]
    pub fn response(&self, learner: &WeakLearner, x: u8) -> f64 {
        match self.kind {
            LearnerKind::DecisionStump => learner.stump_response(x),
            LearnerKind::Perceptron => learner.sigmoid_response(x, self.epsi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn stump_response_splits_on_threshold() {
        let learner = WeakLearner {
            feature: 0,
            threshold: 25.0,
            a: 2.0,
            b: -1.0,
        };
        assert_abs_diff_eq!(learner.stump_response(20), -1.0);
        assert_abs_diff_eq!(learner.stump_response(30), 1.0);
        // Boundary is exclusive: x > threshold.
        assert_abs_diff_eq!(learner.stump_response(25), -1.0);
    }

    #[test]
    fn bounded_sigmoid_saturates() {
        assert_abs_diff_eq!(bounded_sigmoid(0.0, 1.0), 0.0);
        assert!(bounded_sigmoid(1e6, 1.0) <= 1.0);
        assert!(bounded_sigmoid(1e6, 1.0) > 0.999);
        assert!(bounded_sigmoid(-1e6, 1.0) >= -1.0);
        assert!(bounded_sigmoid(-1e6, 1.0) < -0.999);
    }

    #[test]
    fn param_array_is_one_based_and_round_ordered() {
        let model = BoostModel::from_parts(
            LearnerKind::DecisionStump,
            1.0,
            vec![
                WeakLearner {
                    feature: 2,
                    threshold: 12.5,
                    a: 1.0,
                    b: -0.5,
                },
                WeakLearner {
                    feature: 0,
                    threshold: 99.0,
                    a: -2.0,
                    b: 0.25,
                },
            ],
        );

        let params = model.to_param_array();
        assert_eq!(params.shape(), &[4, 2]);
        assert_abs_diff_eq!(params[[0, 0]], 3.0);
        assert_abs_diff_eq!(params[[1, 0]], 12.5);
        assert_abs_diff_eq!(params[[0, 1]], 1.0);
        assert_abs_diff_eq!(params[[3, 1]], 0.25);
    }

    #[test]
    fn param_array_roundtrip() {
        let model = BoostModel::from_parts(
            LearnerKind::Perceptron,
            0.5,
            vec![WeakLearner {
                feature: 4,
                threshold: 0.0,
                a: 0.125,
                b: -3.0,
            }],
        );
        let restored =
            BoostModel::from_param_array(LearnerKind::Perceptron, 0.5, model.to_param_array().view())
                .unwrap();
        assert_eq!(restored, model);
    }

    #[test]
    fn rejects_malformed_param_tables() {
        let three_rows = array![[1.0], [0.0], [1.0]];
        let err =
            BoostModel::from_param_array(LearnerKind::DecisionStump, 1.0, three_rows.view())
                .unwrap_err();
        assert_eq!(err, ModelError::ParamRows { got: 3 });

        let zero_feature = array![[0.0], [0.0], [1.0], [1.0]];
        assert!(matches!(
            BoostModel::from_param_array(LearnerKind::DecisionStump, 1.0, zero_feature.view()),
            Err(ModelError::InvalidFeatureIndex { column: 0, .. })
        ));

        let fractional = array![[1.5], [0.0], [1.0], [1.0]];
        assert!(BoostModel::from_param_array(
            LearnerKind::DecisionStump,
            1.0,
            fractional.view()
        )
        .is_err());
    }

    #[test]
    fn response_dispatches_on_kind() {
        let learner = WeakLearner {
            feature: 0,
            threshold: 0.0,
            a: 1.0,
            b: 0.0,
        };
        let stump = BoostModel::from_parts(LearnerKind::DecisionStump, 1.0, vec![learner]);
        let sigmoid = BoostModel::from_parts(LearnerKind::Perceptron, 1.0, vec![learner]);

        assert_abs_diff_eq!(stump.response(&learner, 5), 1.0);
        assert_abs_diff_eq!(
            sigmoid.response(&learner, 5),
            bounded_sigmoid(5.0, 1.0)
        );
    }
}
