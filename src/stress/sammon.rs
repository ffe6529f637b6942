//! Sammon error.
//!
//! Relative distance-preservation error: every pair's squared residual is
//! divided by its full-space distance, so misplaced nearby points cost more
//! than misplaced distant ones.
//!
//! # References
//!
//! - Sammon (1969), "A Nonlinear Mapping for Data Structure Analysis",
//!   *IEEE Trans. Computers* C-18(5), 401–409

use super::distance::{euclidean, DistanceMatrix, DistanceSummary};
use super::types::CostFunction;
use crate::data::Dataset;

/// Sammon error cost function.
///
/// # Examples
///
/// ```
/// use stressel::stress::{CostFunction, DistanceSummary, Sammon};
/// use stressel::Dataset;
///
/// let x = Dataset::from_rows(&[vec![0.0, 1.0], vec![2.0, 1.0], vec![5.0, 1.0]]).unwrap();
/// let y = x.select_columns(&[0]);
/// let summary = DistanceSummary::compute(&x);
/// assert_eq!(Sammon.accelerated(&summary, &y), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sammon;

impl CostFunction for Sammon {
    fn name(&self) -> &'static str {
        "sammon"
    }

    fn naive(&self, x: &Dataset, y: &Dataset) -> f64 {
        sammon_error(x, y)
    }

    fn accelerated(&self, summary: &DistanceSummary, y: &Dataset) -> f64 {
        if summary.sum_d() == 0.0 {
            return 0.0;
        }
        let reduced = DistanceMatrix::euclidean(y);
        let error: f64 = summary
            .distances()
            .as_slice()
            .iter()
            .zip(reduced.as_slice())
            .map(|(&d, &d_hat)| if d != 0.0 { weighted_error(d, d_hat) } else { 0.0 })
            .sum();
        error / summary.sum_d()
    }
}

/// Naive Sammon error between `x` and its reduced representation `y`.
///
/// Pairs that coincide in `x` are skipped entirely. Returns 0 when every
/// pair coincides.
pub fn sammon_error(x: &Dataset, y: &Dataset) -> f64 {
    let n = x.n_samples();
    let mut sum_d = 0.0;
    let mut sum_error = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let d = euclidean(x.row(i), x.row(j));
            if d != 0.0 {
                let d_hat = euclidean(y.row(i), y.row(j));
                sum_error += weighted_error(d, d_hat);
                sum_d += d;
            }
        }
    }
    if sum_d != 0.0 {
        sum_error / sum_d
    } else {
        0.0
    }
}

/// `(d - d_hat)² / d`, ordered so the square cannot overflow for `d_hat <= d`.
fn weighted_error(d: f64, d_hat: f64) -> f64 {
    let diff = d - d_hat;
    diff * (diff / d)
}
