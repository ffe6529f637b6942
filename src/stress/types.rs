//! The cost function contract.

use super::distance::DistanceSummary;
use crate::data::Dataset;

/// A distance-preservation stress measure.
///
/// Implementations provide two forms that must agree up to floating-point
/// rounding:
///
/// - [`naive`](CostFunction::naive) recomputes both distance sets pair by
///   pair and defines the measure.
/// - [`accelerated`](CostFunction::accelerated) reuses a precomputed
///   [`DistanceSummary`] of the full dataset and is what the optimizers call.
///
/// Both return a finite value `>= 0`, and 0 exactly when `y` preserves every
/// pairwise distance of `x`.
///
/// # Thread Safety
///
/// `CostFunction` must be `Send + Sync` because fitness evaluations may run
/// in parallel using rayon.
pub trait CostFunction: Send + Sync {
    /// Short lowercase identifier used in logs and results.
    fn name(&self) -> &'static str;

    /// Reference form computed directly from `x` and `y`.
    fn naive(&self, x: &Dataset, y: &Dataset) -> f64;

    /// Fast form computed from the summary of `x` and the candidate `y`.
    fn accelerated(&self, summary: &DistanceSummary, y: &Dataset) -> f64;
}

impl<C: CostFunction + ?Sized> CostFunction for &C {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn naive(&self, x: &Dataset, y: &Dataset) -> f64 {
        (**self).naive(x, y)
    }

    fn accelerated(&self, summary: &DistanceSummary, y: &Dataset) -> f64 {
        (**self).accelerated(summary, y)
    }
}
