//! Perceptron/sigmoid search.
//!
//! Per round, fits an affine-plus-bounded-sigmoid response
//! `h(x) = 2/(1+exp(-2*epsi*(a*x+b))) - 1` to every eligible feature with a
//! fixed number of gradient passes, then scores each fit by weighted squared
//! error on the current weights. No pre-sorting is involved on this path.
//!
//! Initialization draws `a` and `b` from the feature's own values at two
//! uniformly random sample positions. The draws come from the driver's seeded
//! generator, sequentially in ascending feature order *before* the parallel
//! fan-out, so a training run is reproducible for any worker count.

use rand::rngs::StdRng;
use rand::Rng;

use crate::data::FeatureMatrix;
use crate::model::bounded_sigmoid;
use crate::utils::Parallelism;

use super::candidate::{reduce_candidates, Candidate};

/// Knobs of the perceptron fit, lifted from the training config.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PerceptronParams {
    /// Learning-rate scalar applied to every gradient step.
    pub lambda: f64,
    /// Sigmoid sharpness.
    pub epsi: f64,
    /// Number of full passes over the samples per feature fit.
    pub max_ite: u32,
}

/// Search every eligible feature for the round's best sigmoid response.
///
/// Returns `None` only when no feature is eligible.
pub(crate) fn search_round(
    matrix: &FeatureMatrix,
    labels: &[i8],
    weights: &[f64],
    eligible: &[bool],
    params: PerceptronParams,
    rng: &mut StdRng,
    parallelism: Parallelism,
) -> Option<Candidate> {
    let n = matrix.n_samples();

    // Two seed positions per eligible feature, drawn in feature order.
    let seeds: Vec<Option<(usize, usize)>> = eligible
        .iter()
        .map(|&on| on.then(|| (rng.gen_range(0..n), rng.gen_range(0..n))))
        .collect();

    let candidates = parallelism.maybe_par_map(0..matrix.n_features(), |feature| {
        let (seed_a, seed_b) = seeds[feature]?;
        let column = matrix.feature(feature);

        let init_a = f64::from(column[seed_a]);
        let init_b = f64::from(column[seed_b]);
        let (a, b) = fit_feature(column, labels, params, init_a, init_b);
        let error = weighted_error(column, labels, weights, params.epsi, a, b);

        Some(Candidate {
            error,
            feature,
            threshold: 0.0,
            a,
            b,
        })
    });

    reduce_candidates(candidates)
}

/// Run the fixed-iteration gradient fit on one feature column.
///
/// Each pass visits every sample once: `fx` is the bounded sigmoid response,
/// and `lambda * (y - fx) * epsi * (1 - fx^2)` is the ascent step, the
/// `(1 - fx^2)` factor being the sigmoid derivative.
fn fit_feature(
    column: &[u8],
    labels: &[i8],
    params: PerceptronParams,
    mut a: f64,
    mut b: f64,
) -> (f64, f64) {
    for _ in 0..params.max_ite {
        for (&x, &y) in column.iter().zip(labels) {
            let xi = f64::from(x);
            let fx = bounded_sigmoid(a * xi + b, params.epsi);
            let step = params.lambda * (f64::from(y) - fx) * params.epsi * (1.0 - fx * fx);
            a += step * xi;
            b += step;
        }
    }
    (a, b)
}

/// Weighted squared error of the final parameters on the current weights.
fn weighted_error(
    column: &[u8],
    labels: &[i8],
    weights: &[f64],
    epsi: f64,
    a: f64,
    b: f64,
) -> f64 {
    column
        .iter()
        .zip(labels)
        .zip(weights)
        .map(|((&x, &y), &w)| {
            let fx = bounded_sigmoid(a * f64::from(x) + b, epsi);
            let residual = f64::from(y) - fx;
            w * residual * residual
        })
        .sum()
}
