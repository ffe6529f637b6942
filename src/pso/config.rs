//! PSO configuration.
//!
//! [`PsoConfig`] holds all parameters that control the swarm loop.

/// Configuration for Particle Swarm Optimization.
///
/// # Defaults
///
/// ```
/// use stressel::pso::PsoConfig;
///
/// let config = PsoConfig::default();
/// assert_eq!(config.num_particles, 30);
/// assert_eq!(config.max_iterations, 100);
/// assert!(config.bounds.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use stressel::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_num_particles(50)
///     .with_max_iterations(30)
///     .with_bounds(0.0, 1.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Number of particles in the swarm.
    pub num_particles: usize,

    /// Number of iterations. There is no early stop.
    pub max_iterations: usize,

    /// Inertia weight `w`: fraction of the previous velocity kept.
    pub inertia: f64,

    /// Cognitive weight `c1`: pull toward the particle's own best.
    pub cognitive: f64,

    /// Social weight `c2`: pull toward the swarm's best.
    pub social: f64,

    /// Per-component `(min, max)` applied to every dimension.
    ///
    /// Positions start uniformly in `[min, max)` and are clipped into
    /// `[min, max]` after each move. `None` starts positions in `[0, 1)` and
    /// never clips.
    pub bounds: Option<(f64, f64)>,

    /// Evaluate particles in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Parallel iterations
    /// are synchronous: every particle moves against the global best from
    /// the start of the iteration, and bests are updated afterwards in
    /// particle order.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            num_particles: 30,
            max_iterations: 100,
            inertia: 0.5,
            cognitive: 0.8,
            social: 0.9,
            bounds: None,
            parallel: false,
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Sets the swarm size.
    pub fn with_num_particles(mut self, n: usize) -> Self {
        self.num_particles = n;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the inertia weight.
    pub fn with_inertia(mut self, w: f64) -> Self {
        self.inertia = w;
        self
    }

    /// Sets the cognitive weight.
    pub fn with_cognitive(mut self, c1: f64) -> Self {
        self.cognitive = c1;
        self
    }

    /// Sets the social weight.
    pub fn with_social(mut self, c2: f64) -> Self {
        self.social = c2;
        self
    }

    /// Sets the search bounds.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some((min, max));
        self
    }

    /// Removes the search bounds.
    pub fn without_bounds(mut self) -> Self {
        self.bounds = None;
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
        if self.num_particles == 0 {
            return Err("num_particles must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be finite and non-negative, got {value}"));
            }
        }
        if let Some((min, max)) = self.bounds {
            if !min.is_finite() || !max.is_finite() {
                return Err("bounds must be finite".into());
            }
            if min >= max {
                return Err(format!("bounds must satisfy min < max, got ({min}, {max})"));
            }
        }
        Ok(())
    }
}
