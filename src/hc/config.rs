//! Hill Climbing configuration.

use crate::construct::ConstructConfig;
use crate::model::TableBounds;

/// Configuration for the Hill Climbing driver.
///
/// # Examples
///
/// ```
/// use u_seating::hc::HcConfig;
/// use u_seating::model::TableBounds;
///
/// let config = HcConfig::default()
///     .with_bounds(TableBounds::new(2, 4))
///     .with_iterations(2000)
///     .with_seed(42);
/// assert_eq!(config.iterations, 2000);
/// ```
#[derive(Debug, Clone)]
pub struct HcConfig {
    /// Number of neighbors to evaluate.
    pub iterations: usize,
    /// Table occupancy bounds.
    pub bounds: TableBounds,
    /// Settings for the initial arrangement.
    pub construction: ConstructConfig,
    /// Random seed (None for random).
    pub seed: Option<u64>,
    /// Optional wall-clock limit in milliseconds.
    pub time_limit_ms: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            bounds: TableBounds::default(),
            construction: ConstructConfig::default(),
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl HcConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
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

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.bounds.validate()?;
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
