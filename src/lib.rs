//! Distance-preserving feature subset selection.
//!
//! Picks the `k` columns of an `N × D` dataset whose pairwise Euclidean
//! distances best reproduce those of the full dataset, and compares two
//! stress measures and two metaheuristics while doing so:
//!
//! - **Stress measures** ([`stress`]): Sammon error and Kruskal stress, each
//!   in a naive reference form and an accelerated form that reuses
//!   precomputed full-space distances.
//! - **Encoding** ([`encoding`]): continuous parameter vectors are random
//!   keys; the `k` largest components name the selected features.
//! - **Fitness** ([`fitness`]): encoder + stress measure + a write-once cache
//!   keyed by the selected subset.
//! - **Particle Swarm Optimization** ([`pso`]) and a **Genetic Algorithm**
//!   ([`ga`]) that minimize any [`Objective`].
//! - **Orchestration** ([`scores`]): [`compute_scores`] runs both optimizers
//!   under both measures for one `k`.
//!
//! # Example
//!
//! ```
//! use stressel::pso::{PsoConfig, PsoRunner};
//! use stressel::stress::Sammon;
//! use stressel::{Dataset, FitnessFunction};
//!
//! let rows: Vec<Vec<f64>> = (0..8)
//!     .map(|i| vec![i as f64, 2.0, (i * i) as f64 / 4.0, -1.0])
//!     .collect();
//! let x = Dataset::from_rows(&rows).unwrap();
//!
//! let fitness = FitnessFunction::new(x, Sammon, 2).unwrap();
//! let config = PsoConfig::default().with_bounds(0.0, 1.0).with_seed(7);
//! let result = PsoRunner::run(&fitness, 4, &config).unwrap();
//!
//! assert_eq!(fitness.decode(&result.best_position).indices(), &[0, 2]);
//! assert_eq!(result.best_fitness, 0.0);
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate swarm/population members with rayon
//! - `serde`: `Serialize`/`Deserialize` for configs and results
//!
//! Progress is reported through the [`log`] facade; install any logger to
//! see it.

pub mod data;
pub mod encoding;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod pso;
pub mod random;
pub mod scores;
pub mod stress;

pub use data::Dataset;
pub use encoding::{FeatureSubset, SubsetEncoder};
pub use error::{Error, Result};
pub use fitness::{FitnessCache, FitnessFunction, NaiveFitness, Objective};
pub use scores::{compute_scores, compute_scores_with, Optimizer, Scores, ScoresConfig, Solution};
pub use stress::{CostFunction, DistanceSummary, Kruskal, Sammon, StressMeasure};
