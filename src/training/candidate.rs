//! Per-feature search results and their deterministic reduction.

/// The best weak learner one feature's search produced this round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate {
    /// Weighted squared error of the response on the current weights.
    pub error: f64,
    /// Feature the response reads.
    pub feature: usize,
    /// Cut point (0.0 for perceptron candidates).
    pub threshold: f64,
    /// Affine slope.
    pub a: f64,
    /// Affine bias.
    pub b: f64,
}

/// Reduce per-feature candidates to the round winner.
///
/// Candidates must arrive in ascending feature order (the fan-out maps over
/// `0..d` and preserves input order). Folding with a strict `<` keeps the
/// lowest feature index on error ties, so the winner is identical for any
/// worker count or schedule.
pub(crate) fn reduce_candidates<I>(candidates: I) -> Option<Candidate>
where
    I: IntoIterator<Item = Option<Candidate>>,
{
    candidates
        .into_iter()
        .flatten()
        .fold(None, |best, candidate| match best {
            Some(current) if candidate.error < current.error => Some(candidate),
            None => Some(candidate),
            keep => keep,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(feature: usize, error: f64) -> Candidate {
        Candidate {
            error,
            feature,
            threshold: 0.0,
            a: 1.0,
            b: 0.0,
        }
    }

    #[test]
    fn picks_minimum_error() {
        let winner = reduce_candidates(vec![
            Some(candidate(0, 0.9)),
            Some(candidate(1, 0.2)),
            Some(candidate(2, 0.5)),
        ])
        .unwrap();
        assert_eq!(winner.feature, 1);
    }

    #[test]
    fn ties_go_to_the_lowest_feature() {
        let winner = reduce_candidates(vec![
            None,
            Some(candidate(1, 0.5)),
            Some(candidate(2, 0.5)),
            Some(candidate(3, 0.5)),
        ])
        .unwrap();
        assert_eq!(winner.feature, 1);
    }

    #[test]
    fn skips_ineligible_features() {
        assert_eq!(reduce_candidates(vec![None, None]), None);

        let winner = reduce_candidates(vec![None, Some(candidate(5, 1.0))]).unwrap();
        assert_eq!(winner.feature, 5);
    }
}
