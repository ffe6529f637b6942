//! Crate error type.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Caller errors rejected before any optimization work starts.
///
/// Numeric degeneracies (coincident samples, zero denominators) are not
/// errors: the cost functions define them as zero stress.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The input matrix is unusable (too few rows, ragged, non-finite).
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    /// Requested subset size is outside `[1, n_features]`.
    #[error("subset size k = {k} must be in [1, {n_features}]")]
    InvalidSubsetSize {
        /// Requested subset size.
        k: usize,
        /// Number of features in the dataset.
        n_features: usize,
    },

    /// Optimizer configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
