//! Runs every (stress measure, optimizer) pair for one subset size.
//!
//! [`compute_scores`] is the crate's top-level entry point: for a dataset and
//! a subset size `k` it searches with PSO and GA under both Sammon error and
//! Kruskal stress and reports the four best solutions.

use crate::data::Dataset;
use crate::encoding::FeatureSubset;
use crate::error::{Error, Result};
use crate::fitness::FitnessFunction;
use crate::ga::{GaConfig, GaRunner};
use crate::pso::{PsoConfig, PsoRunner};
use crate::stress::{DistanceSummary, StressMeasure};
use log::info;
use std::fmt;
use std::sync::Arc;

/// Search strategy that produced a [`Solution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Optimizer {
    /// Particle Swarm Optimization.
    Pso,
    /// Genetic Algorithm.
    Ga,
}

impl fmt::Display for Optimizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Optimizer::Pso => "pso",
            Optimizer::Ga => "ga",
        })
    }
}

/// Best result of one optimizer under one stress measure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Stress measure the run minimized.
    pub measure: StressMeasure,

    /// Search strategy of the run.
    pub optimizer: Optimizer,

    /// Best parameter vector. Decode it with the [`SubsetEncoder`](crate::SubsetEncoder)
    /// or read [`selected`](Self::selected).
    pub best_position: Vec<f64>,

    /// Stress of the selected subset.
    pub best_fitness: f64,

    /// Feature subset `best_position` encodes.
    pub selected: FeatureSubset,

    /// Objective evaluations made by this run.
    pub evaluations: usize,

    /// Evaluations during this run that missed the cache.
    pub cache_misses: usize,
}

/// All four solutions for one subset size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scores {
    /// Subset size every run searched for.
    pub k: usize,

    /// PSO under Sammon error.
    pub pso_sammon: Solution,

    /// PSO under Kruskal stress.
    pub pso_kruskal: Solution,

    /// GA under Sammon error.
    pub ga_sammon: Solution,

    /// GA under Kruskal stress.
    pub ga_kruskal: Solution,
}

impl Scores {
    /// The four solutions: PSO/Sammon, PSO/Kruskal, GA/Sammon, GA/Kruskal.
    pub fn solutions(&self) -> [&Solution; 4] {
        [
            &self.pso_sammon,
            &self.pso_kruskal,
            &self.ga_sammon,
            &self.ga_kruskal,
        ]
    }

    /// The solution with the given measure and optimizer.
    pub fn get(&self, measure: StressMeasure, optimizer: Optimizer) -> &Solution {
        match (measure, optimizer) {
            (StressMeasure::Sammon, Optimizer::Pso) => &self.pso_sammon,
            (StressMeasure::Kruskal, Optimizer::Pso) => &self.pso_kruskal,
            (StressMeasure::Sammon, Optimizer::Ga) => &self.ga_sammon,
            (StressMeasure::Kruskal, Optimizer::Ga) => &self.ga_kruskal,
        }
    }
}

/// Optimizer settings for [`compute_scores_with`].
///
/// The defaults run a 30-particle swarm for 30 iterations and a
/// 30-individual GA for 30 generations (mutation rate 0.1, crossover rate
/// 0.7, mutation std 0.25), both within `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoresConfig {
    /// Settings shared by both PSO runs.
    pub pso: PsoConfig,

    /// Settings shared by both GA runs.
    pub ga: GaConfig,

    /// Master seed. When set, the four runs get seeds `seed`, `seed + 1`,
    /// `seed + 2` and `seed + 3` (PSO/Sammon, PSO/Kruskal, GA/Sammon,
    /// GA/Kruskal), overriding the seeds in `pso` and `ga`.
    pub seed: Option<u64>,
}

impl Default for ScoresConfig {
    fn default() -> Self {
        Self {
            pso: PsoConfig::default()
                .with_num_particles(30)
                .with_max_iterations(30)
                .with_bounds(0.0, 1.0),
            ga: GaConfig::default()
                .with_population_size(30)
                .with_max_generations(30)
                .with_mutation_rate(0.1)
                .with_crossover_rate(0.7)
                .with_mutation_std(0.25)
                .with_bounds(0.0, 1.0),
            seed: None,
        }
    }
}

impl ScoresConfig {
    /// Sets the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the PSO settings.
    pub fn with_pso(mut self, pso: PsoConfig) -> Self {
        self.pso = pso;
        self
    }

    /// Replaces the GA settings.
    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Validates both optimizer configurations.
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.pso.validate().map_err(|e| format!("pso: {e}"))?;
        self.ga.validate().map_err(|e| format!("ga: {e}"))
    }

    fn pso_for(&self, run: u64) -> PsoConfig {
        match self.seed {
            Some(seed) => self.pso.clone().with_seed(seed.wrapping_add(run)),
            None => self.pso.clone(),
        }
    }

    fn ga_for(&self, run: u64) -> GaConfig {
        match self.seed {
            Some(seed) => self.ga.clone().with_seed(seed.wrapping_add(run)),
            None => self.ga.clone(),
        }
    }
}

/// Runs PSO and GA under Sammon error and Kruskal stress with the default
/// [`ScoresConfig`].
///
/// # Examples
///
/// ```
/// use stressel::{compute_scores, Dataset};
///
/// let rows: Vec<Vec<f64>> = (0..10)
///     .map(|i| vec![i as f64, 1.0, (i % 3) as f64])
///     .collect();
/// let x = Dataset::from_rows(&rows).unwrap();
///
/// let scores = compute_scores(2, &x).unwrap();
/// assert_eq!(scores.k, 2);
/// for s in scores.solutions() {
///     assert_eq!(s.selected.indices(), &[0, 2]);
///     assert_eq!(s.best_fitness, 0.0);
/// }
/// ```
pub fn compute_scores(k: usize, x: &Dataset) -> Result<Scores> {
    compute_scores_with(k, x, &ScoresConfig::default())
}

/// Runs PSO and GA under Sammon error and Kruskal stress.
///
/// Each measure gets its own [`FitnessFunction`] and therefore its own
/// cache, which both optimizers share. The dataset's distance summary is
/// computed once and shared read-only by both fitness functions.
///
/// Fails fast, before any distance is computed, if `k` is outside
/// `[1, x.n_features()]` or either optimizer configuration is invalid.
pub fn compute_scores_with(k: usize, x: &Dataset, config: &ScoresConfig) -> Result<Scores> {
    config.validate().map_err(Error::InvalidConfig)?;
    if k == 0 || k > x.n_features() {
        return Err(Error::InvalidSubsetSize {
            k,
            n_features: x.n_features(),
        });
    }

    let dataset = Arc::new(x.clone());
    let summary = Arc::new(DistanceSummary::compute(&dataset));
    let dim = dataset.n_features();

    let sammon = FitnessFunction::with_summary(
        Arc::clone(&dataset),
        Arc::clone(&summary),
        StressMeasure::Sammon,
        k,
    )?;
    let kruskal = FitnessFunction::with_summary(
        Arc::clone(&dataset),
        Arc::clone(&summary),
        StressMeasure::Kruskal,
        k,
    )?;

    let pso_sammon = run_pso(&sammon, dim, &config.pso_for(0))?;
    let pso_kruskal = run_pso(&kruskal, dim, &config.pso_for(1))?;
    let ga_sammon = run_ga(&sammon, dim, &config.ga_for(2))?;
    let ga_kruskal = run_ga(&kruskal, dim, &config.ga_for(3))?;

    Ok(Scores {
        k,
        pso_sammon,
        pso_kruskal,
        ga_sammon,
        ga_kruskal,
    })
}

fn run_pso(
    fitness: &FitnessFunction<StressMeasure>,
    dim: usize,
    config: &PsoConfig,
) -> Result<Solution> {
    let misses_before = fitness.cache().misses();
    let result = PsoRunner::run(fitness, dim, config)?;
    let solution = Solution {
        measure: *fitness.cost(),
        optimizer: Optimizer::Pso,
        selected: fitness.decode(&result.best_position),
        best_position: result.best_position,
        best_fitness: result.best_fitness,
        evaluations: result.evaluations,
        cache_misses: fitness.cache().misses() - misses_before,
    };
    log_solution(&solution, fitness.k());
    Ok(solution)
}

fn run_ga(
    fitness: &FitnessFunction<StressMeasure>,
    dim: usize,
    config: &GaConfig,
) -> Result<Solution> {
    let misses_before = fitness.cache().misses();
    let result = GaRunner::run(fitness, dim, config)?;
    let solution = Solution {
        measure: *fitness.cost(),
        optimizer: Optimizer::Ga,
        selected: fitness.decode(&result.best_individual),
        best_position: result.best_individual,
        best_fitness: result.best_fitness,
        evaluations: result.evaluations,
        cache_misses: fitness.cache().misses() - misses_before,
    };
    log_solution(&solution, fitness.k());
    Ok(solution)
}

fn log_solution(solution: &Solution, k: usize) {
    info!(
        "k={k} {}/{}: fitness={:.6} features={:?} evaluations={} cache_misses={}",
        solution.optimizer,
        solution.measure,
        solution.best_fitness,
        solution.selected.indices(),
        solution.evaluations,
        solution.cache_misses
    );
}
