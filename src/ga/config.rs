//! Evolution run configuration.

/// Configuration for an [`EvolutionEngine`](super::EvolutionEngine) run.
///
/// # Defaults
///
/// ```
/// use u_georoute::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.generations, 300);
/// assert_eq!(config.population_size, 100);
/// assert!(config.seed.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_georoute::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_generations(50)
///     .with_population_size(20)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionConfig {
    /// Number of generations to evolve.
    ///
    /// The loop always runs exactly this many iterations — there is no
    /// early-convergence stop and no fitness-improvement threshold.
    pub generations: usize,

    /// Nominal number of routes per generation.
    ///
    /// An odd value settles one below nominal after the first replacement;
    /// see [`SURVIVOR_DIVISOR`](super::SURVIVOR_DIVISOR).
    pub population_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            generations: 300,
            population_size: 100,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the nominal population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
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
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        Ok(())
    }
}
