//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::construct::ConstructConfig;
use crate::model::TableBounds;

/// Configuration for the Genetic Algorithm driver.
///
/// # Defaults
///
/// ```
/// use u_seating::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 500);
/// assert_eq!(config.tournament_size, 10);
/// assert_eq!(config.elite_count, 5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_seating::ga::GaConfig;
/// use u_seating::model::TableBounds;
///
/// let config = GaConfig::default()
///     .with_bounds(TableBounds::new(3, 5))
///     .with_population_size(80)
///     .with_mutation_rate(0.3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of arrangements in the population.
    pub population_size: usize,

    /// Number of generations to evolve.
    pub generations: usize,

    /// Probability (0.0–1.0) of attempting a mutation on each offspring.
    pub mutation_rate: f64,

    /// Individuals drawn per tournament, capped at the population size.
    ///
    /// The two cheapest individuals of each tournament become parents.
    pub tournament_size: usize,

    /// Number of lowest-cost individuals that compete with the offspring
    /// for a place in the next generation.
    pub elite_count: usize,

    /// The metrics trace samples the best cost every this many generations.
    pub checkpoint_interval: usize,

    /// Table occupancy bounds.
    pub bounds: TableBounds,

    /// Settings for constructing each initial individual.
    pub construction: ConstructConfig,

    /// Whether to build the initial population and offspring in parallel.
    ///
    /// Seeded results are identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Optional wall-clock limit in milliseconds, checked before each
    /// generation.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 500,
            mutation_rate: 0.2,
            tournament_size: 10,
            elite_count: 5,
            checkpoint_interval: 100,
            bounds: TableBounds::default(),
            construction: ConstructConfig::default(),
            parallel: true,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    pub fn with_checkpoint_interval(mut self, n: usize) -> Self {
        self.checkpoint_interval = n;
        self
    }

    pub fn with_bounds(mut self, bounds: TableBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_construction(mut self, construction: ConstructConfig) -> Self {
        self.construction = construction;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.bounds.validate()?;
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if self.checkpoint_interval == 0 {
            return Err("checkpoint_interval must be at least 1".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
