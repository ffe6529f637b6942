//! Parameter vector → fitness composition.

use super::cache::FitnessCache;
use crate::data::Dataset;
use crate::encoding::{FeatureSubset, SubsetEncoder};
use crate::error::{Error, Result};
use crate::stress::{CostFunction, DistanceSummary};
use std::sync::Arc;

/// A function to minimize over parameter vectors.
///
/// Both [`PsoRunner`](crate::pso::PsoRunner) and
/// [`GaRunner`](crate::ga::GaRunner) drive any `Objective`. Closures
/// `Fn(&[f64]) -> f64` implement it directly:
///
/// ```
/// use stressel::Objective;
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]), 5.0);
/// ```
///
/// # Thread Safety
///
/// `Objective` must be `Send + Sync` because the runners may evaluate
/// candidates in parallel using rayon.
pub trait Objective: Send + Sync {
    /// Fitness of `params`. Lower is better.
    fn evaluate(&self, params: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, params: &[f64]) -> f64 {
        self(params)
    }
}

/// Cached stress of the subset a parameter vector encodes.
///
/// Evaluation encodes the vector with the [`SubsetEncoder`], looks the
/// subset up in the [`FitnessCache`] and, on a miss, restricts the dataset
/// to the subset's columns and runs the accelerated cost function against
/// the shared [`DistanceSummary`].
///
/// # Examples
///
/// ```
/// use stressel::stress::Kruskal;
/// use stressel::{Dataset, FitnessFunction, Objective};
///
/// let x = Dataset::from_rows(&[
///     vec![0.0, 7.0, 1.0],
///     vec![1.0, 7.0, 2.0],
///     vec![4.0, 7.0, 0.0],
/// ])
/// .unwrap();
/// let fitness = FitnessFunction::new(x, Kruskal, 2).unwrap();
///
/// // Columns 0 and 2 carry all the variation; column 1 is constant.
/// assert_eq!(fitness.evaluate(&[0.9, 0.1, 0.8]), 0.0);
/// assert_eq!(fitness.cache().misses(), 1);
/// ```
#[derive(Debug)]
pub struct FitnessFunction<C: CostFunction> {
    dataset: Arc<Dataset>,
    summary: Arc<DistanceSummary>,
    encoder: SubsetEncoder,
    cost: C,
    cache: FitnessCache,
}

impl<C: CostFunction> FitnessFunction<C> {
    /// Builds a fitness function, computing the dataset's distance summary.
    ///
    /// Fails unless `1 <= k <= dataset.n_features()`.
    pub fn new(dataset: impl Into<Arc<Dataset>>, cost: C, k: usize) -> Result<Self> {
        let dataset = dataset.into();
        let summary = Arc::new(DistanceSummary::compute(&dataset));
        Self::with_summary(dataset, summary, cost, k)
    }

    /// Builds a fitness function reusing an existing summary of `dataset`.
    ///
    /// The cache is always fresh; only the read-only summary is shared.
    pub fn with_summary(
        dataset: impl Into<Arc<Dataset>>,
        summary: Arc<DistanceSummary>,
        cost: C,
        k: usize,
    ) -> Result<Self> {
        let dataset = dataset.into();
        if summary.distances().len() != dataset.n_samples() {
            return Err(Error::InvalidDataset(format!(
                "distance summary covers {} samples, dataset has {}",
                summary.distances().len(),
                dataset.n_samples()
            )));
        }
        let encoder = SubsetEncoder::new(k, dataset.n_features())?;
        Ok(Self {
            dataset,
            summary,
            encoder,
            cost,
            cache: FitnessCache::new(),
        })
    }

    /// Bounds the cache; see [`FitnessCache::with_capacity_limit`].
    pub fn with_cache_limit(mut self, limit: usize) -> Self {
        self.cache = FitnessCache::new().with_capacity_limit(limit);
        self
    }

    /// The subset a parameter vector selects.
    pub fn decode(&self, params: &[f64]) -> FeatureSubset {
        self.encoder.encode(params)
    }

    /// Stress of a subset, served from the cache when possible.
    pub fn evaluate_subset(&self, subset: &FeatureSubset) -> f64 {
        self.cache.get_or_compute(subset, || {
            let reduced = self.dataset.select_columns(subset.indices());
            self.cost.accelerated(&self.summary, &reduced)
        })
    }

    /// Parameter vector length expected by [`evaluate`](Objective::evaluate).
    pub fn dim(&self) -> usize {
        self.encoder.n_features()
    }

    /// Subset size.
    pub fn k(&self) -> usize {
        self.encoder.k()
    }

    /// Encoder mapping parameter vectors to subsets.
    pub fn encoder(&self) -> &SubsetEncoder {
        &self.encoder
    }

    /// Subset → stress cache, with hit and miss counters.
    pub fn cache(&self) -> &FitnessCache {
        &self.cache
    }

    /// Shared full-space distance summary.
    pub fn summary(&self) -> &Arc<DistanceSummary> {
        &self.summary
    }

    /// The cost function.
    pub fn cost(&self) -> &C {
        &self.cost
    }
}

impl<C: CostFunction> Objective for FitnessFunction<C> {
    fn evaluate(&self, params: &[f64]) -> f64 {
        let subset = self.encoder.encode(params);
        self.evaluate_subset(&subset)
    }
}

/// Uncached reference objective using the naive cost form.
///
/// Recomputes both distance sets on every call. Useful to cross-check
/// [`FitnessFunction`] and as a baseline in benchmarks.
#[derive(Debug, Clone)]
pub struct NaiveFitness<C: CostFunction> {
    dataset: Arc<Dataset>,
    encoder: SubsetEncoder,
    cost: C,
}

impl<C: CostFunction> NaiveFitness<C> {
    /// Fails unless `1 <= k <= dataset.n_features()`.
    pub fn new(dataset: impl Into<Arc<Dataset>>, cost: C, k: usize) -> Result<Self> {
        let dataset = dataset.into();
        let encoder = SubsetEncoder::new(k, dataset.n_features())?;
        Ok(Self {
            dataset,
            encoder,
            cost,
        })
    }
}

impl<C: CostFunction> Objective for NaiveFitness<C> {
    fn evaluate(&self, params: &[f64]) -> f64 {
        let subset = self.encoder.encode(params);
        let reduced = self.dataset.select_columns(subset.indices());
        self.cost.naive(&self.dataset, &reduced)
    }
}
