//! Real-valued genetic operators.
//!
//! Crossover and mutation operators for `f64` chromosomes of fixed length.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: swap tails after a random cut, O(n)
//!
//! # Mutation Operators
//!
//! - [`gaussian_mutation`]: per-gene additive Gaussian noise, clipped into
//!   bounds, O(n)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Bäck, Fogel & Michalewicz (1997), *Handbook of Evolutionary Computation*, C3.2

use rand::Rng;
use rand_distr::{Distribution, Normal};

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Picks a cut `c` uniformly in `[1, n)` and returns
/// `(p1[..c] ++ p2[c..], p2[..c] ++ p1[c..])`. Parents shorter than 2 have
/// no valid cut and are returned as copies.
///
/// Children are always fresh vectors; the parents are never aliased.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &[f64],
    parent2: &[f64],
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);
    let child1 = [&parent1[..cut], &parent2[cut..]].concat();
    let child2 = [&parent2[..cut], &parent1[cut..]].concat();
    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Gaussian mutation.
///
/// Each gene independently, with probability `rate`, receives additive noise
/// drawn from `noise` and is then clipped into `[min, max]`.
pub fn gaussian_mutation<R: Rng>(
    genes: &mut [f64],
    rate: f64,
    noise: &Normal<f64>,
    (min, max): (f64, f64),
    rng: &mut R,
) {
    for gene in genes.iter_mut() {
        if rng.random::<f64>() < rate {
            *gene = (*gene + noise.sample(rng)).clamp(min, max);
        }
    }
}
