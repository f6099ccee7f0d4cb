//! Feature matrix container.
//!
//! Byte-valued feature data in feature-major layout: each feature's values
//! across all samples are contiguous in memory. Inputs in sample-major
//! orientation are transposed once at construction.

use ndarray::ArrayView2;

/// A quantized feature matrix: `n_features` x `n_samples`, entries in 0..=255.
///
/// # Storage Layout
///
/// Feature-major: `data[f * n_samples + i]` is the value of feature `f` for
/// sample `i`. Per-feature slices are contiguous, which is what the per-round
/// searches iterate over.
///
/// # Example
///
/// ```
/// use gentleboost::FeatureMatrix;
/// use ndarray::array;
///
/// // 2 features, 3 samples, feature-major input
/// let matrix = FeatureMatrix::from_features_major(array![[1u8, 2, 3], [4, 5, 6]].view());
/// assert_eq!(matrix.n_features(), 2);
/// assert_eq!(matrix.n_samples(), 3);
/// assert_eq!(matrix.feature(1), &[4, 5, 6]);
///
/// // The same data, sample-major input
/// let matrix = FeatureMatrix::from_samples_major(array![[1u8, 4], [2, 5], [3, 6]].view());
/// assert_eq!(matrix.feature(1), &[4, 5, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    /// Flat feature-major values, length `n_features * n_samples`.
    data: Box<[u8]>,
    n_features: usize,
    n_samples: usize,
}

impl FeatureMatrix {
    /// Create from feature-major data: shape `[n_features, n_samples]`.
    pub fn from_features_major(features: ArrayView2<u8>) -> Self {
        let n_features = features.nrows();
        let n_samples = features.ncols();

        let mut data = vec![0u8; n_features * n_samples];
        for (f, row) in features.rows().into_iter().enumerate() {
            let block = &mut data[f * n_samples..(f + 1) * n_samples];
            for (dst, &v) in block.iter_mut().zip(row.iter()) {
                *dst = v;
            }
        }

        Self {
            data: data.into_boxed_slice(),
            n_features,
            n_samples,
        }
    }

    /// Create from sample-major data: shape `[n_samples, n_features]`.
    ///
    /// Transposes into feature-major layout.
    pub fn from_samples_major(samples: ArrayView2<u8>) -> Self {
        let n_samples = samples.nrows();
        let n_features = samples.ncols();

        let mut data = vec![0u8; n_features * n_samples];
        for (i, row) in samples.rows().into_iter().enumerate() {
            for (f, &v) in row.iter().enumerate() {
                data[f * n_samples + i] = v;
            }
        }

        Self {
            data: data.into_boxed_slice(),
            n_features,
            n_samples,
        }
    }

    /// Number of features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// All values for one feature, indexed by sample.
    #[inline]
    pub fn feature(&self, feature: usize) -> &[u8] {
        &self.data[feature * self.n_samples..(feature + 1) * self.n_samples]
    }

    /// The flat feature-major byte block.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn features_major_keeps_rows() {
        let m = FeatureMatrix::from_features_major(array![[10u8, 20, 30], [40, 50, 60]].view());
        assert_eq!(m.n_features(), 2);
        assert_eq!(m.n_samples(), 3);
        assert_eq!(m.feature(0), &[10, 20, 30]);
        assert_eq!(m.feature(1), &[40, 50, 60]);
    }

    #[test]
    fn samples_major_transposes() {
        let m = FeatureMatrix::from_samples_major(array![[10u8, 40], [20, 50], [30, 60]].view());
        assert_eq!(m.n_features(), 2);
        assert_eq!(m.n_samples(), 3);
        assert_eq!(m.feature(0), &[10, 20, 30]);
        assert_eq!(m.feature(1), &[40, 50, 60]);
    }

    #[test]
    fn orientations_agree() {
        let fm = FeatureMatrix::from_features_major(array![[1u8, 2], [3, 4], [5, 6]].view());
        let sm = FeatureMatrix::from_samples_major(array![[1u8, 3, 5], [2, 4, 6]].view());
        assert_eq!(fm.bytes(), sm.bytes());
    }

    #[test]
    fn non_contiguous_view_is_copied_correctly() {
        // A transposed view is not in standard layout; construction must not
        // depend on the input's memory order.
        let base = array![[1u8, 4], [2, 5], [3, 6]];
        let m = FeatureMatrix::from_features_major(base.t());
        assert_eq!(m.feature(0), &[1, 2, 3]);
        assert_eq!(m.feature(1), &[4, 5, 6]);
    }
}
