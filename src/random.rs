//! Seedable random sources for the optimizers.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the generator used by every runner.
///
/// The same seed always yields the same stream, so runs configured with a
/// seed are reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, drawing a fresh one if absent.
pub fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
