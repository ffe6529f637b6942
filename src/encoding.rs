//! Random-key encoding of feature subsets.
//!
//! Both optimizers search continuous vectors in `R^D`. [`SubsetEncoder`]
//! turns such a vector into a discrete choice of `k` feature indices by
//! ranking its components, in the spirit of the random-key representation
//! of Bean (1994).
//!
//! # Tie Policy
//!
//! Components are ordered by value, largest first, using
//! [`f64::total_cmp`]. Equal values keep ascending index order, so when a
//! tie straddles the k-th rank the lower indices are selected. The chosen
//! indices are then sorted ascending, which makes [`FeatureSubset`] a
//! canonical cache key.

use crate::error::{Error, Result};
use std::cmp::Ordering;

/// Ascending, duplicate-free list of selected feature indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<usize>"))]
pub struct FeatureSubset(Vec<usize>);

impl FeatureSubset {
    /// Builds a subset from arbitrary indices, sorting and deduplicating.
    pub fn new(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self(indices)
    }

    /// The selected indices in ascending order.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of selected features.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Boolean mask of length `n_features` with `true` at selected indices.
    pub fn as_mask(&self, n_features: usize) -> Vec<bool> {
        let mut mask = vec![false; n_features];
        for &i in &self.0 {
            mask[i] = true;
        }
        mask
    }
}

impl From<Vec<usize>> for FeatureSubset {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}

/// Maps parameter vectors to their top-`k` [`FeatureSubset`].
///
/// # Examples
///
/// ```
/// use stressel::SubsetEncoder;
///
/// let encoder = SubsetEncoder::new(2, 4).unwrap();
/// let subset = encoder.encode(&[0.9, 0.1, 0.5, 0.7]);
/// assert_eq!(subset.indices(), &[0, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsetEncoder {
    k: usize,
    n_features: usize,
}

impl SubsetEncoder {
    /// Creates an encoder selecting `k` of `n_features` indices.
    ///
    /// Fails unless `1 <= k <= n_features`.
    pub fn new(k: usize, n_features: usize) -> Result<Self> {
        if k == 0 || k > n_features {
            return Err(Error::InvalidSubsetSize { k, n_features });
        }
        Ok(Self { k, n_features })
    }

    /// Subset size.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Expected parameter vector length.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Selects the indices of the `k` largest components.
    ///
    /// # Panics
    /// Panics if `params.len() != n_features`.
    pub fn encode(&self, params: &[f64]) -> FeatureSubset {
        assert_eq!(
            params.len(),
            self.n_features,
            "parameter vector length must equal the feature count"
        );
        let mut order: Vec<usize> = (0..params.len()).collect();
        // Stable sort: equal keys stay in ascending index order.
        order.sort_by(|&a, &b| rank_desc(params[a], params[b]));
        order.truncate(self.k);
        order.sort_unstable();
        FeatureSubset(order)
    }
}

fn rank_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_invalid_k() {
        assert_eq!(
            SubsetEncoder::new(0, 3),
            Err(Error::InvalidSubsetSize { k: 0, n_features: 3 })
        );
        assert!(SubsetEncoder::new(4, 3).is_err());
        assert!(SubsetEncoder::new(3, 3).is_ok());
    }

    #[test]
    fn test_selects_largest() {
        let e = SubsetEncoder::new(3, 6).unwrap();
        let s = e.encode(&[0.2, 0.8, 0.1, 0.9, 0.3, 0.85]);
        assert_eq!(s.indices(), &[1, 3, 5]);
    }

    #[test]
    fn test_ties_prefer_lower_index() {
        let e = SubsetEncoder::new(2, 5).unwrap();
        assert_eq!(e.encode(&[0.5, 0.5, 0.5, 0.5, 0.5]).indices(), &[0, 1]);
        // 0.9 is taken outright; the tie at 0.4 goes to index 1.
        assert_eq!(e.encode(&[0.1, 0.4, 0.9, 0.4, 0.4]).indices(), &[1, 2]);
    }

    #[test]
    fn test_k_equals_d_selects_all() {
        let e = SubsetEncoder::new(4, 4).unwrap();
        assert_eq!(e.encode(&[3.0, -1.0, 0.0, 2.0]).indices(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let e = SubsetEncoder::new(1, 3).unwrap();
        let params = vec![0.3, 0.1, 0.2];
        let before = params.clone();
        let _ = e.encode(&params);
        assert_eq!(params, before);
    }

    #[test]
    #[should_panic(expected = "parameter vector length")]
    fn test_wrong_length_panics() {
        SubsetEncoder::new(1, 3).unwrap().encode(&[0.0, 1.0]);
    }

    #[test]
    fn test_feature_subset_canonical() {
        let s = FeatureSubset::new(vec![4, 1, 4, 2]);
        assert_eq!(s.indices(), &[1, 2, 4]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.as_mask(5), vec![false, true, true, false, true]);
        assert_eq!(FeatureSubset::from(vec![3, 0, 3]), FeatureSubset::new(vec![0, 3]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_canonicalizes() {
        let s: FeatureSubset = serde_json::from_str("[5, 2, 5, 0]").unwrap();
        assert_eq!(s.indices(), &[0, 2, 5]);
        assert_eq!(s, FeatureSubset::new(vec![0, 2, 5]));
        assert_eq!(serde_json::to_string(&s).unwrap(), "[0,2,5]");
    }

    proptest! {
        #[test]
        fn prop_encode_is_canonical(params in prop::collection::vec(-1.0f64..1.0, 1..16), k_seed in 0usize..16) {
            let d = params.len();
            let k = k_seed % d + 1;
            let subset = SubsetEncoder::new(k, d).unwrap().encode(&params);
            prop_assert_eq!(subset.len(), k);
            prop_assert!(subset.indices().windows(2).all(|w| w[0] < w[1]));
            prop_assert!(subset.indices().iter().all(|&i| i < d));
            // Every selected component is >= every unselected one.
            let mask = subset.as_mask(d);
            let min_in = subset.indices().iter().map(|&i| params[i]).fold(f64::INFINITY, f64::min);
            let max_out = (0..d).filter(|&i| !mask[i]).map(|i| params[i]).fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(min_in >= max_out);
        }

        #[test]
        fn prop_scaling_keeps_subset(params in prop::collection::vec(0.0f64..1.0, 2..12)) {
            let d = params.len();
            let e = SubsetEncoder::new(d / 2 + 1, d).unwrap();
            let scaled: Vec<f64> = params.iter().map(|p| p * 4.0).collect();
            prop_assert_eq!(e.encode(&params), e.encode(&scaled));
        }
    }
}
