//! PSO swarm loop execution.
//!
//! [`PsoRunner`] drives the swarm: random initialization → per-particle
//! velocity/position update → evaluation → personal/global best update →
//! repeat for a fixed number of iterations.

use super::config::PsoConfig;
use crate::error::{Error, Result};
use crate::fitness::Objective;
use crate::random::rng_from;
use log::{debug, trace};
use rand::Rng;

/// Result of a PSO run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoResult {
    /// Global best position at the end of the run.
    pub best_position: Vec<f64>,

    /// Fitness of `best_position`.
    pub best_fitness: f64,

    /// Iterations executed (always `max_iterations`).
    pub iterations: usize,

    /// Objective evaluations performed, initialization included.
    pub evaluations: usize,

    /// Global best fitness after initialization (index 0) and after each
    /// iteration. Never increases.
    pub fitness_history: Vec<f64>,
}

/// One member of the swarm.
#[derive(Debug, Clone)]
struct Particle {
    position: Vec<f64>,
    velocity: Vec<f64>,
    best_position: Vec<f64>,
    best_fitness: f64,
}

impl Particle {
    /// Applies `v = w·v + c1·r1·(pbest − x) + c2·r2·(gbest − x)` then `x += v`,
    /// clipping `x` into bounds when set.
    fn advance(&mut self, global_best: &[f64], r1: f64, r2: f64, config: &PsoConfig) {
        for j in 0..self.position.len() {
            let x = self.position[j];
            let v = config.inertia * self.velocity[j]
                + config.cognitive * r1 * (self.best_position[j] - x)
                + config.social * r2 * (global_best[j] - x);
            self.velocity[j] = v;
            self.position[j] = match config.bounds {
                Some((min, max)) => (x + v).clamp(min, max),
                None => x + v,
            };
        }
    }
}

/// Shared swarm-wide best.
#[derive(Debug, Clone)]
struct GlobalBest {
    position: Vec<f64>,
    fitness: f64,
}

impl GlobalBest {
    /// Records `fitness` for `particle` and propagates strict improvements.
    fn observe(&mut self, particle: &mut Particle, fitness: f64) {
        if fitness < particle.best_fitness {
            particle.best_position.clone_from(&particle.position);
            particle.best_fitness = fitness;
            if fitness < self.fitness {
                self.position.clone_from(&particle.position);
                self.fitness = fitness;
            }
        }
    }
}

/// Executes Particle Swarm Optimization.
///
/// # Usage
///
/// ```
/// use stressel::pso::{PsoConfig, PsoRunner};
///
/// let sphere = |x: &[f64]| x.iter().map(|v| (v - 0.25).powi(2)).sum::<f64>();
/// let config = PsoConfig::default()
///     .with_max_iterations(50)
///     .with_bounds(0.0, 1.0)
///     .with_seed(42);
///
/// let result = PsoRunner::run(&sphere, 3, &config).unwrap();
/// assert!(result.best_fitness < 1e-2);
/// ```
pub struct PsoRunner;

impl PsoRunner {
    /// Minimizes `objective` over `dim`-dimensional vectors.
    ///
    /// Fails with [`Error::InvalidConfig`] if the configuration does not
    /// validate or `dim == 0`.
    pub fn run<O: Objective + ?Sized>(
        objective: &O,
        dim: usize,
        config: &PsoConfig,
    ) -> Result<PsoResult> {
        config.validate().map_err(Error::InvalidConfig)?;
        if dim == 0 {
            return Err(Error::InvalidConfig("dim must be at least 1".into()));
        }

        let mut rng = rng_from(config.seed);
        let synchronous = config.parallel && cfg!(feature = "parallel");
        debug!(
            "pso start: dim={dim} particles={} iterations={} bounds={:?} synchronous={synchronous}",
            config.num_particles, config.max_iterations, config.bounds
        );

        // 1. Initialize positions uniformly, velocities at zero
        let (min, max) = config.bounds.unwrap_or((0.0, 1.0));
        let mut swarm: Vec<Particle> = (0..config.num_particles)
            .map(|_| {
                let position: Vec<f64> = (0..dim)
                    .map(|_| min + (max - min) * rng.random::<f64>())
                    .collect();
                Particle {
                    velocity: vec![0.0; dim],
                    best_position: position.clone(),
                    best_fitness: f64::INFINITY,
                    position,
                }
            })
            .collect();

        // 2. Evaluate; personal bests are the initial positions
        let initial = evaluate_positions(objective, &swarm, synchronous);
        for (particle, fitness) in swarm.iter_mut().zip(initial) {
            particle.best_fitness = fitness;
        }
        let mut evaluations = swarm.len();

        // 3. Global best is the first minimum
        let leader = swarm
            .iter()
            .enumerate()
            .fold(0, |best, (i, p)| {
                if p.best_fitness < swarm[best].best_fitness {
                    i
                } else {
                    best
                }
            });
        let mut global = GlobalBest {
            position: swarm[leader].best_position.clone(),
            fitness: swarm[leader].best_fitness,
        };

        let mut fitness_history = Vec::with_capacity(config.max_iterations + 1);
        fitness_history.push(global.fitness);

        // 4. Swarm loop
        for iteration in 0..config.max_iterations {
            if synchronous {
                for particle in swarm.iter_mut() {
                    let (r1, r2) = (rng.random::<f64>(), rng.random::<f64>());
                    particle.advance(&global.position, r1, r2, config);
                }
                let scores = evaluate_positions(objective, &swarm, true);
                for (particle, fitness) in swarm.iter_mut().zip(scores) {
                    global.observe(particle, fitness);
                }
            } else {
                for particle in swarm.iter_mut() {
                    let (r1, r2) = (rng.random::<f64>(), rng.random::<f64>());
                    particle.advance(&global.position, r1, r2, config);
                    let fitness = objective.evaluate(&particle.position);
                    global.observe(particle, fitness);
                }
            }
            evaluations += swarm.len();
            fitness_history.push(global.fitness);
            trace!("pso iteration {}: best={}", iteration + 1, global.fitness);
        }

        debug!(
            "pso done: best={} evaluations={evaluations}",
            global.fitness
        );

        Ok(PsoResult {
            best_position: global.position,
            best_fitness: global.fitness,
            iterations: config.max_iterations,
            evaluations,
            fitness_history,
        })
    }
}

/// Evaluate every particle's current position.
#[cfg(feature = "parallel")]
fn evaluate_positions<O: Objective + ?Sized>(
    objective: &O,
    swarm: &[Particle],
    parallel: bool,
) -> Vec<f64> {
    use rayon::prelude::*;

    if parallel {
        swarm
            .par_iter()
            .map(|p| objective.evaluate(&p.position))
            .collect()
    } else {
        swarm.iter().map(|p| objective.evaluate(&p.position)).collect()
    }
}

/// Evaluate every particle's current position.
#[cfg(not(feature = "parallel"))]
fn evaluate_positions<O: Objective + ?Sized>(
    objective: &O,
    swarm: &[Particle],
    _parallel: bool,
) -> Vec<f64> {
    swarm.iter().map(|p| objective.evaluate(&p.position)).collect()
}

// ============================================================================
// Tests
// ============================================================================
