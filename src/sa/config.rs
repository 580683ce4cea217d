//! SA configuration and cooling schedules.

use std::fmt;
use std::str::FromStr;

use crate::construct::ConstructConfig;
use crate::model::TableBounds;

/// Temperature below which annealing stops.
pub const MIN_TEMPERATURE: f64 = 0.01;

/// Cooling schedule applied after every iteration `k` (0-based).
///
/// Parses from and displays as `"exponential"`, `"linear"` and
/// `"logarithmic"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CoolingSchedule {
    /// `T_{k+1} = cooling_rate * T_k`.
    #[default]
    Exponential,

    /// `T_{k+1} = T_k - T_0 / iterations`. Reaches zero on the last iteration.
    Linear,

    /// `T_{k+1} = T_0 / (1 + ln(1 + k))`.
    Logarithmic,
}

impl CoolingSchedule {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoolingSchedule::Exponential => "exponential",
            CoolingSchedule::Linear => "linear",
            CoolingSchedule::Logarithmic => "logarithmic",
        }
    }
}

impl fmt::Display for CoolingSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoolingSchedule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exponential" => Ok(CoolingSchedule::Exponential),
            "linear" => Ok(CoolingSchedule::Linear),
            "logarithmic" => Ok(CoolingSchedule::Logarithmic),
            other => Err(format!(
                "cooling_type must be one of exponential, linear, logarithmic; got {other:?}"
            )),
        }
    }
}

/// Configuration for the Simulated Annealing driver.
///
/// # Examples
///
/// ```
/// use u_seating::model::TableBounds;
/// use u_seating::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_bounds(TableBounds::new(4, 6))
///     .with_initial_temperature(500.0)
///     .with_cooling(CoolingSchedule::Linear)
///     .with_iterations(20_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Starting temperature. Must be positive.
    pub initial_temperature: f64,

    /// Factor in (0, 1) for exponential cooling.
    pub cooling_rate: f64,

    /// Iteration budget. Annealing may stop earlier once the temperature
    /// drops below [`MIN_TEMPERATURE`].
    pub iterations: usize,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Table occupancy bounds.
    pub bounds: TableBounds,

    /// Settings for the initial arrangement.
    pub construction: ConstructConfig,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Optional wall-clock limit in milliseconds.
    pub time_limit_ms: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.995,
            iterations: 10_000,
            cooling: CoolingSchedule::default(),
            bounds: TableBounds::default(),
            construction: ConstructConfig::default(),
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
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
        if self.initial_temperature.is_nan() || self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
