//! Fitness evaluation shared by both optimizers.
//!
//! - [`Objective`]: the function-to-minimize contract the runners consume
//! - [`FitnessFunction`]: encoder + cost function + cache, the production
//!   objective
//! - [`FitnessCache`]: write-once memo keyed by [`FeatureSubset`](crate::FeatureSubset)
//! - [`NaiveFitness`]: uncached reference objective on the naive cost form

mod cache;
mod function;

pub use cache::FitnessCache;
pub use function::{FitnessFunction, NaiveFitness, Objective};
