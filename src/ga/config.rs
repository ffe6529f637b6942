//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, operator rates, search bounds, termination and
/// parallelism.
///
/// # Defaults
///
/// ```
/// use stressel::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 50);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use stressel::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_max_generations(30)
///     .with_mutation_rate(0.1)
///     .with_mutation_std(0.25)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Offspring are bred in pairs; with an odd size the second child of the
    /// last pair is dropped.
    pub population_size: usize,

    /// Number of generations. There is no early stop.
    pub max_generations: usize,

    /// Per-gene probability of Gaussian mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, the children are copies of the parents.
    pub crossover_rate: f64,

    /// Standard deviation of the Gaussian mutation noise.
    pub mutation_std: f64,

    /// `(min, max)` for every gene. Initial genes are drawn uniformly in
    /// `[min, max)`; mutated genes are clipped into `[min, max]`.
    pub bounds: (f64, f64),

    /// Number of distinct contestants per tournament.
    pub tournament_size: usize,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 50,
            mutation_rate: 0.01,
            crossover_rate: 0.7,
            mutation_std: 0.1,
            bounds: (0.0, 1.0),
            tournament_size: 3,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation noise standard deviation.
    pub fn with_mutation_std(mut self, std: f64) -> Self {
        self.mutation_std = std;
        self
    }

    /// Sets the gene bounds.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = (min, max);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if self.tournament_size > self.population_size {
            return Err(format!(
                "tournament_size ({}) exceeds population_size ({})",
                self.tournament_size, self.population_size
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be in [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err("crossover_rate must be in [0, 1]".into());
        }
        if !self.mutation_std.is_finite() || self.mutation_std < 0.0 {
            return Err(format!(
                "mutation_std must be finite and non-negative, got {}",
                self.mutation_std
            ));
        }
        let (min, max) = self.bounds;
        if !min.is_finite() || !max.is_finite() {
            return Err("bounds must be finite".into());
        }
        if min >= max {
            return Err(format!("bounds must satisfy min < max, got ({min}, {max})"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 50);
        assert!((config.mutation_rate - 0.01).abs() < 1e-10);
        assert!((config.crossover_rate - 0.7).abs() < 1e-10);
        assert!((config.mutation_std - 0.1).abs() < 1e-10);
        assert_eq!(config.bounds, (0.0, 1.0));
        assert_eq!(config.tournament_size, 3);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(30)
            .with_max_generations(10)
            .with_mutation_rate(0.1)
            .with_crossover_rate(0.8)
            .with_mutation_std(0.25)
            .with_bounds(-1.0, 1.0)
            .with_tournament_size(5)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 30);
        assert_eq!(config.max_generations, 10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_std - 0.25).abs() < 1e-10);
        assert_eq!(config.bounds, (-1.0, 1.0));
        assert_eq!(config.tournament_size, 5);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);
        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_tournament_size() {
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
        let config = GaConfig::default()
            .with_population_size(4)
            .with_tournament_size(5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_mutation_std() {
        assert!(GaConfig::default().with_mutation_std(-0.1).validate().is_err());
        assert!(GaConfig::default().with_mutation_std(f64::NAN).validate().is_err());
        assert!(GaConfig::default().with_mutation_std(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_bounds() {
        assert!(GaConfig::default().with_bounds(0.0, 0.0).validate().is_err());
        assert!(GaConfig::default().with_bounds(1.0, -1.0).validate().is_err());
        assert!(GaConfig::default()
            .with_bounds(f64::NEG_INFINITY, 0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rates_set_directly() {
        let config = GaConfig {
            mutation_rate: 1.5,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
