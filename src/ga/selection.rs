//! Parent selection for the GA.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use rand::seq::index::sample;
use rand::Rng;

/// Tournament selection without replacement.
///
/// Draws `size` distinct individuals uniformly at random and returns the
/// index of the one with the lowest fitness. Ties go to the contestant drawn
/// first. `size` is clamped into `[1, population.len()]`.
///
/// Higher `size` = stronger selection pressure. When `size` equals the
/// population size the best individual always wins.
///
/// # Complexity
/// O(size) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Individual], size: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let contestants = sample(rng, n, size.clamp(1, n));

    let mut best = contestants.index(0);
    for idx in contestants.iter().skip(1) {
        if population[idx].fitness < population[best].fitness {
            best = idx;
        }
    }
    best
}
