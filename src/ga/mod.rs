//! Genetic Algorithm over real-valued parameter vectors.
//!
//! A generational GA with tournament selection, single-point crossover and
//! per-gene Gaussian mutation. The objective is any
//! [`Objective`](crate::Objective); in this crate usually a
//! [`FitnessFunction`](crate::FitnessFunction) whose parameter vectors are
//! random keys for a feature subset.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, bounds)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best-ever solution with per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and Gaussian mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::tournament;
pub use types::Individual;
