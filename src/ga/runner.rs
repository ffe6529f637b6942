//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::operators::{gaussian_mutation, single_point_crossover};
use super::selection::tournament;
use super::types::Individual;
use crate::error::{Error, Result};
use crate::fitness::Objective;
use crate::random::rng_from;
use log::{debug, trace};
use rand::Rng;
use rand_distr::Normal;

/// Result of a GA optimization run.
///
/// Contains the best solution found, along with statistics about the
/// evolutionary process.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best parameter vector found during the entire run.
    pub best_individual: Vec<f64>,

    /// Fitness of `best_individual`.
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Objective evaluations performed, initial population included.
    pub evaluations: usize,

    /// Best fitness seen so far: initial population (index 0), then after
    /// each generation. Never increases.
    pub fitness_history: Vec<f64>,

    /// Best fitness within each generation's population, index 0 being the
    /// initial population. May increase between generations.
    pub generation_best: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// Each generation is bred from scratch: two parents are picked by
/// tournament, crossed over, both children mutated, until the new
/// population is full. The old population is then discarded. Because no
/// individual survives unchanged, the runner keeps the best individual ever
/// seen separately.
///
/// # Usage
///
/// ```
/// use stressel::ga::{GaConfig, GaRunner};
///
/// let sphere = |x: &[f64]| x.iter().map(|v| (v - 0.5).powi(2)).sum::<f64>();
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
///
/// let result = GaRunner::run(&sphere, 4, &config).unwrap();
/// assert!(result.best_fitness < 0.1);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Minimizes `objective` over `dim`-dimensional vectors.
    ///
    /// Fails with [`Error::InvalidConfig`] if the configuration does not
    /// validate or `dim == 0`.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        dim: usize,
        config: &GaConfig,
    ) -> Result<GaResult> {
        config.validate().map_err(Error::InvalidConfig)?;
        if dim == 0 {
            return Err(Error::InvalidConfig("dim must be at least 1".into()));
        }
        let noise = Normal::new(0.0, config.mutation_std)
            .map_err(|e| Error::InvalidConfig(format!("mutation_std: {e}")))?;

        let mut rng = rng_from(config.seed);
        debug!(
            "ga start: dim={dim} population={} generations={} bounds={:?}",
            config.population_size, config.max_generations, config.bounds
        );

        // 1. Initialize population
        let (min, max) = config.bounds;
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| {
                Individual::new(
                    (0..dim)
                        .map(|_| min + (max - min) * rng.random::<f64>())
                        .collect(),
                )
            })
            .collect();

        // 2. Evaluate initial population
        evaluate_population(objective, &mut population, config.parallel);
        let mut evaluations = population.len();

        // 3. Track best
        let mut best = find_best(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        let mut generation_best = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness);
        generation_best.push(best.fitness);

        // 4. Evolutionary loop
        for gen in 0..config.max_generations {
            let mut next_gen: Vec<Individual> = Vec::with_capacity(config.population_size);

            while next_gen.len() < config.population_size {
                // Selection
                let p1 = tournament(&population, config.tournament_size, &mut rng);
                let p2 = tournament(&population, config.tournament_size, &mut rng);

                // Crossover
                let (mut child1, mut child2) =
                    if rng.random::<f64>() < config.crossover_rate {
                        single_point_crossover(
                            &population[p1].genes,
                            &population[p2].genes,
                            &mut rng,
                        )
                    } else {
                        (population[p1].genes.clone(), population[p2].genes.clone())
                    };

                // Mutation
                gaussian_mutation(&mut child1, config.mutation_rate, &noise, config.bounds, &mut rng);
                gaussian_mutation(&mut child2, config.mutation_rate, &noise, config.bounds, &mut rng);

                next_gen.push(Individual::new(child1));
                if next_gen.len() < config.population_size {
                    next_gen.push(Individual::new(child2));
                }
            }

            evaluate_population(objective, &mut next_gen, config.parallel);
            evaluations += next_gen.len();
            population = next_gen;

            // Update best
            let gen_best = find_best(&population);
            generation_best.push(gen_best.fitness);
            if gen_best.fitness < best.fitness {
                best = gen_best.clone();
            }
            fitness_history.push(best.fitness);

            trace!(
                "ga generation {}: generation best={} overall best={}",
                gen + 1,
                gen_best.fitness,
                best.fitness
            );
        }

        debug!("ga done: best={} evaluations={evaluations}", best.fitness);

        Ok(GaResult {
            best_individual: best.genes,
            best_fitness: best.fitness,
            generations: config.max_generations,
            evaluations,
            fitness_history,
            generation_best,
        })
    }
}

/// Evaluate all individuals in the population.
#[cfg(feature = "parallel")]
fn evaluate_population<O: Objective + ?Sized>(
    objective: &O,
    population: &mut [Individual],
    parallel: bool,
) {
    use rayon::prelude::*;

    if parallel {
        population.par_iter_mut().for_each(|ind| {
            ind.fitness = objective.evaluate(&ind.genes);
        });
    } else {
        for ind in population.iter_mut() {
            ind.fitness = objective.evaluate(&ind.genes);
        }
    }
}

/// Evaluate all individuals in the population.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<O: Objective + ?Sized>(
    objective: &O,
    population: &mut [Individual],
    _parallel: bool,
) {
    for ind in population.iter_mut() {
        ind.fitness = objective.evaluate(&ind.genes);
    }
}

/// Find the first individual with the lowest fitness.
///
/// The population is never empty: `GaConfig::validate` requires at least 2.
fn find_best(population: &[Individual]) -> &Individual {
    population
        .iter()
        .skip(1)
        .fold(&population[0], |best, ind| {
            if ind.fitness < best.fitness {
                ind
            } else {
                best
            }
        })
}

// ============================================================================
// Tests
// ============================================================================
