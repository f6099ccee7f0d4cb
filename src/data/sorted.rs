//! Pre-sorted feature columns.
//!
//! The decision-stump search sweeps each feature in ascending value order.
//! Sorting is a one-time preprocessing step: each column is sorted once,
//! together with a permutation mapping sorted position back to the original
//! sample index, and every boosting round reuses the result.
//!
//! Values are bytes, so a stable counting sort over the 0..=255 domain gives
//! O(N) per column instead of a comparison sort's O(N log N).

use crate::data::FeatureMatrix;
use crate::utils::Parallelism;

/// Per-feature sorted values with the permutation back to sample indices.
///
/// For feature `f`, `values(f)` is ascending and `order(f)[i]` is the sample
/// index the value at sorted position `i` came from. The sort is stable, so
/// equal values keep their original sample order.
#[derive(Debug, Clone)]
pub struct SortedColumns {
    /// Sorted values, one `n_samples` block per feature.
    values: Box<[u8]>,
    /// Permutation: sorted position -> original sample index, same blocking.
    order: Box<[u32]>,
    n_features: usize,
    n_samples: usize,
}

impl SortedColumns {
    /// Sort every column of the matrix, fanning out over features.
    pub fn build(matrix: &FeatureMatrix, parallelism: Parallelism) -> Self {
        let n_features = matrix.n_features();
        let n_samples = matrix.n_samples();

        let mut values = vec![0u8; n_features * n_samples];
        let mut order = vec![0u32; n_features * n_samples];

        if n_samples > 0 {
            let columns = matrix
                .bytes()
                .chunks_exact(n_samples)
                .zip(values.chunks_exact_mut(n_samples))
                .zip(order.chunks_exact_mut(n_samples));
            parallelism.maybe_par_bridge_for_each(columns, |((src, vals), ord)| {
                counting_sort_into(src, vals, ord);
            });
        }

        Self {
            values: values.into_boxed_slice(),
            order: order.into_boxed_slice(),
            n_features,
            n_samples,
        }
    }

    /// Number of features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of samples per column.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Ascending values of one feature.
    #[inline]
    pub fn values(&self, feature: usize) -> &[u8] {
        &self.values[feature * self.n_samples..(feature + 1) * self.n_samples]
    }

    /// Sorted position -> original sample index for one feature.
    #[inline]
    pub fn order(&self, feature: usize) -> &[u32] {
        &self.order[feature * self.n_samples..(feature + 1) * self.n_samples]
    }
}

/// Stable counting sort of one byte column into `(values, order)`.
fn counting_sort_into(column: &[u8], values: &mut [u8], order: &mut [u32]) {
    let mut counts = [0usize; 256];
    for &v in column {
        counts[v as usize] += 1;
    }

    // Exclusive prefix sums: write offset per value.
    let mut offsets = [0usize; 256];
    let mut total = 0usize;
    for (offset, &count) in offsets.iter_mut().zip(counts.iter()) {
        *offset = total;
        total += count;
    }

    for (i, &v) in column.iter().enumerate() {
        let slot = offsets[v as usize];
        values[slot] = v;
        order[slot] = i as u32;
        offsets[v as usize] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn single_column(values: &[u8]) -> SortedColumns {
        let data = ndarray::Array2::from_shape_vec((1, values.len()), values.to_vec()).unwrap();
        let matrix = FeatureMatrix::from_features_major(data.view());
        SortedColumns::build(&matrix, Parallelism::Sequential)
    }

    #[test]
    fn sorts_with_stable_index_permutation() {
        let sorted = single_column(&[5, 3, 5, 1]);
        assert_eq!(sorted.values(0), &[1, 3, 5, 5]);
        // The two 5s keep their original sample order (0 before 2).
        assert_eq!(sorted.order(0), &[3, 1, 0, 2]);
    }

    #[test]
    fn permutation_reindexes_parallel_arrays() {
        let column = [5u8, 3, 5, 1];
        let labels = [1i8, -1, 1, -1];
        let sorted = single_column(&column);

        // Re-indexing the original arrays through the permutation must
        // reproduce the same (value, label) pairing as a stable reference.
        let mut reference: Vec<(u8, i8)> = column.iter().copied().zip(labels).collect();
        reference.sort_by_key(|&(v, _)| v);

        let permuted: Vec<(u8, i8)> = sorted
            .order(0)
            .iter()
            .map(|&i| (column[i as usize], labels[i as usize]))
            .collect();
        assert_eq!(permuted, reference);
    }

    #[test]
    fn sorts_every_feature_independently() {
        let matrix =
            FeatureMatrix::from_features_major(array![[9u8, 0, 4], [2, 2, 1]].view());
        let sorted = SortedColumns::build(&matrix, Parallelism::Sequential);
        assert_eq!(sorted.values(0), &[0, 4, 9]);
        assert_eq!(sorted.order(0), &[1, 2, 0]);
        assert_eq!(sorted.values(1), &[1, 2, 2]);
        assert_eq!(sorted.order(1), &[2, 0, 1]);
    }

    #[test]
    fn parallel_build_matches_sequential() {
        let data: Vec<u8> = (0..64u32).map(|i| (i * 37 % 251) as u8).collect();
        let arr = ndarray::Array2::from_shape_vec((8, 8), data).unwrap();
        let matrix = FeatureMatrix::from_features_major(arr.view());

        let seq = SortedColumns::build(&matrix, Parallelism::Sequential);
        let par = SortedColumns::build(&matrix, Parallelism::Parallel);
        for f in 0..matrix.n_features() {
            assert_eq!(seq.values(f), par.values(f));
            assert_eq!(seq.order(f), par.order(f));
        }
    }
}
