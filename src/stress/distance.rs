//! Pairwise Euclidean distances and their reductions.

use crate::data::Dataset;

/// Full symmetric `N × N` Euclidean distance matrix with a zero diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes all pairwise distances between the rows of `x`.
    ///
    /// Each of the `N(N-1)/2` unique distances is computed once and mirrored.
    pub fn euclidean(x: &Dataset) -> Self {
        let n = x.n_samples();
        let mut values = vec![0.0; n * n];
        for i in 0..n {
            let a = x.row(i);
            for j in (i + 1)..n {
                let d = euclidean(a, x.row(j));
                values[i * n + j] = d;
                values[j * n + i] = d;
            }
        }
        Self { n, values }
    }

    /// Number of points (rows and columns).
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix has no points.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between points `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// All cells in row-major order, both triangles included.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Euclidean distance between two equal-length vectors.
///
/// When the plain sum of squares overflows or leaves the normal range, the
/// differences are rescaled by their largest magnitude first, so distinct
/// finite points always get a finite, nonzero distance.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    if sum.is_finite() && sum >= f64::MIN_POSITIVE {
        return sum.sqrt();
    }
    let scale = a
        .iter()
        .zip(b)
        .fold(0.0_f64, |m, (x, y)| m.max((x - y).abs()));
    if scale == 0.0 {
        return 0.0;
    }
    let scaled: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| {
            let t = (x - y) / scale;
            t * t
        })
        .sum();
    scale * scaled.sqrt()
}

/// Precomputed full-space distances of one dataset.
///
/// `sum_d` and `sum_d_squared` are taken over every cell of the matrix, so
/// each unordered pair contributes twice. The accelerated cost functions sum
/// their numerators over every cell as well, which keeps them equal to the
/// single-counted naive forms.
///
/// Squared distances are kept relative to the largest distance, so the
/// Kruskal ratio stays finite when `d²` itself would overflow or underflow.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceSummary {
    distances: DistanceMatrix,
    sum_d: f64,
    max_d: f64,
    scaled_sum_d_squared: f64,
}

impl DistanceSummary {
    /// Computes the distance matrix of `x` and its sums.
    pub fn compute(x: &Dataset) -> Self {
        let distances = DistanceMatrix::euclidean(x);
        let cells = distances.as_slice();
        let sum_d = cells.iter().sum();
        let max_d = cells.iter().fold(0.0_f64, |m, &d| m.max(d));
        let scaled_sum_d_squared = scaled_sum_of_squares(cells.iter().copied(), max_d);
        Self {
            distances,
            sum_d,
            max_d,
            scaled_sum_d_squared,
        }
    }

    /// The full-space distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Sum of all matrix cells.
    pub fn sum_d(&self) -> f64 {
        self.sum_d
    }

    /// Sum of all squared matrix cells.
    ///
    /// May overflow to infinity or underflow to zero for extreme data; the
    /// cost functions use [`max_d`](Self::max_d) and
    /// [`scaled_sum_d_squared`](Self::scaled_sum_d_squared) instead.
    pub fn sum_d_squared(&self) -> f64 {
        self.scaled_sum_d_squared * self.max_d * self.max_d
    }

    /// Largest pairwise distance. Zero only when every sample coincides.
    pub fn max_d(&self) -> f64 {
        self.max_d
    }

    /// `Σ (d / max_d)²` over all cells, or 0 when `max_d == 0`.
    pub fn scaled_sum_d_squared(&self) -> f64 {
        self.scaled_sum_d_squared
    }
}

/// `Σ (v / scale)²`, or 0 when `scale == 0`.
pub(crate) fn scaled_sum_of_squares(values: impl Iterator<Item = f64>, scale: f64) -> f64 {
    if scale == 0.0 {
        return 0.0;
    }
    values
        .map(|v| {
            let t = v / scale;
            t * t
        })
        .sum()
}
