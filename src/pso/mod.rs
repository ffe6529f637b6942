//! Particle Swarm Optimization.
//!
//! A swarm of particles moves through `R^D`; each particle is pulled toward
//! its own best position and the swarm's best position, with inertia from
//! its previous velocity. The objective is any [`Objective`](crate::Objective).
//!
//! # Key Types
//!
//! - [`PsoConfig`]: swarm size, iteration budget, weights, bounds, seed
//! - [`PsoRunner`]: executes the swarm loop
//! - [`PsoResult`]: global best and its history
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"

mod config;
mod runner;

pub use config::PsoConfig;
pub use runner::{PsoResult, PsoRunner};
