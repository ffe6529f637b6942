//! Distance-preservation stress measures.
//!
//! A stress measure scores how well a reduced representation `Y` of a
//! dataset `X` keeps the pairwise Euclidean distances of `X`. Two measures
//! are provided, each in a naive and an accelerated form:
//!
//! - [`Sammon`]: relative error, weighted by the inverse full-space distance
//! - [`Kruskal`]: absolute squared error over total squared distance
//!
//! The accelerated forms read a [`DistanceSummary`] computed once per
//! dataset and shared by every evaluation.

mod distance;
mod kruskal;
mod sammon;
mod types;

pub use distance::{euclidean, DistanceMatrix, DistanceSummary};
pub use kruskal::{kruskal_stress, Kruskal};
pub use sammon::{sammon_error, Sammon};
pub use types::CostFunction;

use crate::data::Dataset;
use std::fmt;
use std::str::FromStr;

/// Value-level selector for the built-in stress measures.
///
/// ```
/// use stressel::stress::StressMeasure;
///
/// let m: StressMeasure = "kruskal".parse().unwrap();
/// assert_eq!(m, StressMeasure::Kruskal);
/// assert_eq!(m.to_string(), "kruskal");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StressMeasure {
    /// Sammon error.
    Sammon,
    /// Kruskal stress.
    Kruskal,
}

impl StressMeasure {
    /// Both measures, in the order the orchestrator runs them.
    pub const ALL: [StressMeasure; 2] = [StressMeasure::Sammon, StressMeasure::Kruskal];
}

impl CostFunction for StressMeasure {
    fn name(&self) -> &'static str {
        match self {
            StressMeasure::Sammon => Sammon.name(),
            StressMeasure::Kruskal => Kruskal.name(),
        }
    }

    fn naive(&self, x: &Dataset, y: &Dataset) -> f64 {
        match self {
            StressMeasure::Sammon => Sammon.naive(x, y),
            StressMeasure::Kruskal => Kruskal.naive(x, y),
        }
    }

    fn accelerated(&self, summary: &DistanceSummary, y: &Dataset) -> f64 {
        match self {
            StressMeasure::Sammon => Sammon.accelerated(summary, y),
            StressMeasure::Kruskal => Kruskal.accelerated(summary, y),
        }
    }
}

impl fmt::Display for StressMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StressMeasure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sammon" => Ok(StressMeasure::Sammon),
            "kruskal" => Ok(StressMeasure::Kruskal),
            other => Err(format!("unknown stress measure: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dataset_strategy() -> impl Strategy<Value = Dataset> {
        (2usize..=20, 1usize..=10).prop_flat_map(|(n, d)| {
            prop::collection::vec(-100.0f64..100.0, n * d)
                .prop_map(move |values| Dataset::new(n, d, values).unwrap())
        })
    }

    fn columns_strategy() -> impl Strategy<Value = (Dataset, Vec<usize>)> {
        dataset_strategy().prop_flat_map(|x| {
            let d = x.n_features();
            prop::sample::subsequence((0..d).collect::<Vec<_>>(), 1..=d)
                .prop_map(move |cols| (x.clone(), cols))
        })
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()) + 1e-15
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Sammon".parse::<StressMeasure>(), Ok(StressMeasure::Sammon));
        assert!("stress".parse::<StressMeasure>().is_err());
        assert_eq!(StressMeasure::Sammon.to_string(), "sammon");
    }

    #[test]
    fn test_measure_delegates() {
        let x = Dataset::from_rows(&[vec![0.0, 0.0], vec![3.0, 0.0], vec![0.0, 4.0]]).unwrap();
        let y = x.select_columns(&[0]);
        let s = DistanceSummary::compute(&x);
        assert_eq!(StressMeasure::Sammon.accelerated(&s, &y), Sammon.accelerated(&s, &y));
        assert_eq!(StressMeasure::Kruskal.naive(&x, &y), Kruskal.naive(&x, &y));
    }

    #[test]
    fn test_all_features_zero_error() {
        let x = Dataset::from_rows(&[
            vec![0.5, -1.0, 2.0],
            vec![1.5, 3.0, -2.0],
            vec![7.0, 0.0, 0.25],
            vec![-3.0, 2.0, 9.0],
        ])
        .unwrap();
        let y = x.select_columns(&[0, 1, 2]);
        let s = DistanceSummary::compute(&x);
        for m in StressMeasure::ALL {
            assert_eq!(m.naive(&x, &y), 0.0);
            assert_eq!(m.accelerated(&s, &y), 0.0);
        }
    }

    #[test]
    fn test_huge_magnitudes_stay_finite() {
        let x = Dataset::from_rows(&[vec![0.0, 0.0], vec![1e200, 1.0], vec![-1e200, 3.0]])
            .unwrap();
        let y = x.select_columns(&[1]);
        let s = DistanceSummary::compute(&x);
        for m in StressMeasure::ALL {
            let naive = m.naive(&x, &y);
            let fast = m.accelerated(&s, &y);
            assert!(naive.is_finite() && naive >= 0.0, "{m}: naive {naive}");
            assert!(fast.is_finite() && fast >= 0.0, "{m}: accelerated {fast}");
            assert!(close(naive, fast), "{m}: {naive} vs {fast}");
            // Column 1 carries almost nothing of the full distances.
            assert!((fast - 1.0).abs() < 1e-9, "{m}: {fast}");
        }
    }

    #[test]
    fn test_tiny_magnitudes_match_rescaled() {
        let rows = [vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 3.0], vec![2.0, 2.0]];
        let tiny: Vec<Vec<f64>> = rows
            .iter()
            .map(|r| r.iter().map(|v| v * 1e-170).collect())
            .collect();
        let unit = Dataset::from_rows(&rows).unwrap();
        let tiny = Dataset::from_rows(&tiny).unwrap();
        let (su, st) = (DistanceSummary::compute(&unit), DistanceSummary::compute(&tiny));

        // Both measures are scale invariant, so distinct tiny rows must not
        // collapse into coincident ones.
        for m in StressMeasure::ALL {
            let expected = m.accelerated(&su, &unit.select_columns(&[0]));
            let y = tiny.select_columns(&[0]);
            let fast = m.accelerated(&st, &y);
            let naive = m.naive(&tiny, &y);
            assert!(expected > 0.0);
            assert!(close(fast, expected), "{m}: {fast} vs {expected}");
            assert!(close(naive, expected), "{m}: {naive} vs {expected}");
        }
    }

    proptest! {
        #[test]
        fn prop_non_negative((x, cols) in columns_strategy()) {
            let y = x.select_columns(&cols);
            let s = DistanceSummary::compute(&x);
            for m in StressMeasure::ALL {
                let naive = m.naive(&x, &y);
                let fast = m.accelerated(&s, &y);
                prop_assert!(naive.is_finite() && naive >= 0.0);
                prop_assert!(fast.is_finite() && fast >= 0.0);
            }
        }

        #[test]
        fn prop_accelerated_matches_naive((x, cols) in columns_strategy()) {
            let y = x.select_columns(&cols);
            let s = DistanceSummary::compute(&x);
            for m in StressMeasure::ALL {
                let naive = m.naive(&x, &y);
                let fast = m.accelerated(&s, &y);
                prop_assert!(close(naive, fast), "{m}: naive {naive} vs accelerated {fast}");
            }
        }
    }
}
