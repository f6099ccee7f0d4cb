//! Decision-stump search.
//!
//! Per round, finds the (feature, threshold, a, b) minimizing the weighted
//! squared error `sum w * (y - h(x))^2` with `h(x) = a*[x > threshold] + b`
//! over every eligible feature and every candidate split.
//!
//! Columns are pre-sorted once (see [`SortedColumns`]); the sweep maintains
//! running cumulative sums of weight and label*weight, which makes both the
//! optimal affine response and its error available in closed form at every
//! split position. The minimizer is exact, not sampled: with the round's
//! global statistics in hand each position costs O(1), so a round is O(N)
//! per feature.

use crate::data::SortedColumns;
use crate::utils::Parallelism;

use super::candidate::{reduce_candidates, Candidate};

/// Global statistics of the current round, shared by every feature sweep.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RoundStats {
    /// `sum y[i] * w[i]` over all samples.
    pub eyw: f64,
    /// `sum y[i]^2 * w[i]` over all samples.
    pub sumwyy: f64,
}

impl RoundStats {
    pub fn compute(labels: &[i8], weights: &[f64]) -> Self {
        let mut eyw = 0.0;
        let mut sumwyy = 0.0;
        for (&y, &w) in labels.iter().zip(weights) {
            let yw = f64::from(y) * w;
            eyw += yw;
            sumwyy += f64::from(y) * yw;
        }
        Self { eyw, sumwyy }
    }
}

/// Search every eligible feature for the round's best stump.
///
/// Returns `None` only when no feature is eligible.
pub(crate) fn search_round(
    sorted: &SortedColumns,
    labels: &[i8],
    weights: &[f64],
    eligible: &[bool],
    parallelism: Parallelism,
) -> Option<Candidate> {
    let stats = RoundStats::compute(labels, weights);

    let candidates = parallelism.maybe_par_map(0..sorted.n_features(), |feature| {
        if !eligible[feature] {
            return None;
        }
        Some(scan_feature(
            feature,
            sorted.values(feature),
            sorted.order(feature),
            labels,
            weights,
            stats,
        ))
    });

    reduce_candidates(candidates)
}

/// Sweep one pre-sorted column and return its error-minimizing stump.
///
/// At sweep position `i` the left partition is the first `i + 1` sorted
/// samples. With `Sw`/`Syw` the cumulative weight and label-weight of the
/// left partition, the least-squares response is `b = Syw/Sw` on the left
/// and `a + b = (Eyw - Syw)/(1 - Sw)` on the right, and the weighted squared
/// error follows in closed form. First-encountered minimum wins (strict `<`).
fn scan_feature(
    feature: usize,
    values: &[u8],
    order: &[u32],
    labels: &[i8],
    weights: &[f64],
    stats: RoundStats,
) -> Candidate {
    let n = values.len();
    let last = n - 1;

    let mut sw = 0.0;
    let mut syw = 0.0;

    let mut best_error = f64::INFINITY;
    let mut best_threshold = 0.0;
    let mut best_a = 0.0;
    let mut best_b = 0.0;

    for i in 0..n {
        let sample = order[i] as usize;
        let w = weights[sample];
        sw += w;
        syw += f64::from(labels[sample]) * w;

        let b = syw / sw;
        let a = if sw != 1.0 {
            (stats.eyw - syw) / (1.0 - sw) - b
        } else {
            // The left partition holds all the mass; the closed form for the
            // right side degenerates, matching the boundary split exactly.
            (stats.eyw - syw) - b
        };

        let error = stats.sumwyy - 2.0 * a * (stats.eyw - syw) - 2.0 * b * stats.eyw
            + (a * a + 2.0 * a * b) * (1.0 - sw)
            + b * b;

        if error < best_error {
            best_error = error;
            best_threshold = if i < last {
                (f64::from(values[i]) + f64::from(values[i + 1])) / 2.0
            } else {
                f64::from(values[i])
            };
            best_a = a;
            best_b = b;
        }
    }

    Candidate {
        error: best_error,
        feature,
        threshold: best_threshold,
        a: best_a,
        b: best_b,
    }
}
