//! Kruskal stress.
//!
//! Absolute squared residuals normalized by the total squared full-space
//! distance. No per-pair division, so coincident pairs need no masking.
//!
//! # References
//!
//! - Kruskal (1964), "Multidimensional scaling by optimizing goodness of fit
//!   to a nonmetric hypothesis", *Psychometrika* 29(1), 1–27

use super::distance::{euclidean, scaled_sum_of_squares, DistanceMatrix, DistanceSummary};
use super::types::CostFunction;
use crate::data::Dataset;

/// Kruskal stress cost function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kruskal;

impl CostFunction for Kruskal {
    fn name(&self) -> &'static str {
        "kruskal"
    }

    fn naive(&self, x: &Dataset, y: &Dataset) -> f64 {
        kruskal_stress(x, y)
    }

    fn accelerated(&self, summary: &DistanceSummary, y: &Dataset) -> f64 {
        let max_d = summary.max_d();
        if max_d == 0.0 {
            return 0.0;
        }
        let reduced = DistanceMatrix::euclidean(y);
        let diffs = summary
            .distances()
            .as_slice()
            .iter()
            .zip(reduced.as_slice())
            .map(|(&d, &d_hat)| d - d_hat);
        scaled_sum_of_squares(diffs, max_d) / summary.scaled_sum_d_squared()
    }
}

/// Naive Kruskal stress between `x` and its reduced representation `y`.
///
/// Returns 0 when every pair in `x` coincides.
pub fn kruskal_stress(x: &Dataset, y: &Dataset) -> f64 {
    let n = x.n_samples();
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push((euclidean(x.row(i), x.row(j)), euclidean(y.row(i), y.row(j))));
        }
    }
    // Both sums are taken relative to the largest distance to keep d² finite.
    let max_d = pairs.iter().fold(0.0_f64, |m, &(d, _)| m.max(d));
    if max_d == 0.0 {
        return 0.0;
    }
    let sum_stress = scaled_sum_of_squares(pairs.iter().map(|&(d, d_hat)| d - d_hat), max_d);
    let sum_d_squared = scaled_sum_of_squares(pairs.iter().map(|&(d, _)| d), max_d);
    sum_stress / sum_d_squared
}
