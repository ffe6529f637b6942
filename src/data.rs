//! Dense input matrix.
//!
//! [`Dataset`] is the `N × D` matrix the whole pipeline reads from. It is
//! validated once at construction and never mutated afterwards.

use crate::error::{Error, Result};

/// Immutable row-major `N × D` matrix of finite `f64` values.
///
/// # Examples
///
/// ```
/// use stressel::Dataset;
///
/// let x = Dataset::from_rows(&[vec![0.0, 1.0], vec![3.0, 5.0]]).unwrap();
/// assert_eq!(x.n_samples(), 2);
/// assert_eq!(x.n_features(), 2);
/// assert_eq!(x.get(1, 0), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDataset"))]
pub struct Dataset {
    n_samples: usize,
    n_features: usize,
    values: Vec<f64>,
}

impl Dataset {
    /// Builds a dataset from a flat row-major buffer.
    ///
    /// Fails when `n_samples < 2`, `n_features == 0`, the buffer length does
    /// not match, or any value is NaN or infinite.
    pub fn new(n_samples: usize, n_features: usize, values: Vec<f64>) -> Result<Self> {
        if n_samples < 2 {
            return Err(Error::InvalidDataset(format!(
                "need at least 2 samples, got {n_samples}"
            )));
        }
        if n_features == 0 {
            return Err(Error::InvalidDataset("need at least 1 feature".into()));
        }
        let expected = n_samples.checked_mul(n_features).ok_or_else(|| {
            Error::InvalidDataset(format!("{n_samples}x{n_features} overflows usize"))
        })?;
        if values.len() != expected {
            return Err(Error::InvalidDataset(format!(
                "expected {expected} values for {n_samples}x{n_features}, got {}",
                values.len()
            )));
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::InvalidDataset(format!(
                "non-finite value at row {}, column {}",
                pos / n_features,
                pos % n_features
            )));
        }
        Ok(Self {
            n_samples,
            n_features,
            values,
        })
    }

    /// Builds a dataset from a slice of rows. All rows must have equal length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n_features = rows.first().map_or(0, Vec::len);
        if let Some(i) = rows.iter().position(|r| r.len() != n_features) {
            return Err(Error::InvalidDataset(format!(
                "row {i} has {} columns, expected {n_features}",
                rows[i].len()
            )));
        }
        let values = rows.iter().flatten().copied().collect();
        Self::new(rows.len(), n_features, values)
    }

    /// Number of rows (N).
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Number of columns (D).
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.n_features;
        &self.values[start..start + self.n_features]
    }

    /// Value at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n_features + j]
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.n_features)
    }

    /// Copies the given columns, in the given order, into a new dataset.
    ///
    /// # Panics
    /// Panics if `columns` is empty or any index is out of range.
    pub fn select_columns(&self, columns: &[usize]) -> Dataset {
        assert!(!columns.is_empty(), "must select at least one column");
        let mut values = Vec::with_capacity(self.n_samples * columns.len());
        for row in self.rows() {
            values.extend(columns.iter().map(|&j| row[j]));
        }
        Dataset {
            n_samples: self.n_samples,
            n_features: columns.len(),
            values,
        }
    }
}

/// Unchecked wire form; deserialization goes through [`Dataset::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDataset {
    n_samples: usize,
    n_features: usize,
    values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDataset> for Dataset {
    type Error = Error;

    fn try_from(raw: RawDataset) -> Result<Self> {
        Dataset::new(raw.n_samples, raw.n_features, raw.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let x = Dataset::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(x.n_samples(), 2);
        assert_eq!(x.n_features(), 3);
        assert_eq!(x.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(x.get(0, 2), 3.0);
    }

    #[test]
    fn test_rejects_single_sample() {
        let err = Dataset::from_rows(&[vec![1.0, 2.0]]).unwrap_err();
        assert!(matches!(err, Error::InvalidDataset(_)));
    }

    #[test]
    fn test_rejects_no_features() {
        assert!(Dataset::new(3, 0, vec![]).is_err());
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = Dataset::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        assert!(Dataset::new(2, 2, vec![1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_rejects_size_overflow() {
        let err = Dataset::new(usize::MAX, 2, vec![0.0; 4]).unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let err = serde_json::from_str::<Dataset>(
            r#"{"n_samples":1,"n_features":3,"values":[1.0]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("at least 2 samples"));
        assert!(serde_json::from_str::<Dataset>(
            r#"{"n_samples":2,"n_features":2,"values":[1.0,2.0,3.0]}"#
        )
        .is_err());

        let x = Dataset::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let json = serde_json::to_string(&x).unwrap();
        assert_eq!(serde_json::from_str::<Dataset>(&json).unwrap(), x);
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = Dataset::new(2, 2, vec![1.0, f64::NAN, 3.0, 4.0]).unwrap_err();
        assert!(err.to_string().contains("row 0, column 1"));
        assert!(Dataset::new(2, 1, vec![f64::INFINITY, 0.0]).is_err());
    }

    #[test]
    fn test_select_columns() {
        let x = Dataset::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let y = x.select_columns(&[0, 2]);
        assert_eq!(y.n_features(), 2);
        assert_eq!(y.row(0), &[1.0, 3.0]);
        assert_eq!(y.row(1), &[4.0, 6.0]);
    }
}
