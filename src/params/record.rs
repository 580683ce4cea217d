//! The search parameter record and its validator.

use crate::construct::ConstructConfig;
use crate::error::{Result, SeatingError};
use crate::ga::GaConfig;
use crate::hc::HcConfig;
use crate::model::TableBounds;
use crate::sa::{CoolingSchedule, SaConfig};

/// Parameters shared by every driver. Each driver reads only the fields
/// it needs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParams {
    pub min_per_table: usize,
    pub max_per_table: usize,
    pub initial_temperature: f64,
    /// Used by exponential cooling only, but always validated.
    pub cooling_rate: f64,
    /// SA and HC iterations; GA generations.
    pub iterations: usize,
    /// `"exponential"`, `"linear"` or `"logarithmic"`.
    pub cooling_type: String,
    pub population_size: usize,
    pub mutation_rate: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            min_per_table: 2,
            max_per_table: 8,
            initial_temperature: 100.0,
            cooling_rate: 0.95,
            iterations: 1000,
            cooling_type: CoolingSchedule::Exponential.to_string(),
            population_size: 100,
            mutation_rate: 0.05,
        }
    }
}

impl SearchParams {
    pub fn bounds(&self) -> TableBounds {
        TableBounds::new(self.min_per_table, self.max_per_table)
    }

    /// Parsed `cooling_type`.
    pub fn cooling(&self) -> Result<CoolingSchedule> {
        self.cooling_type.parse().map_err(SeatingError::Validation)
    }

    /// Simulated Annealing configuration for these parameters.
    pub fn sa_config(&self, seed: Option<u64>) -> Result<SaConfig> {
        let config = SaConfig {
            initial_temperature: self.initial_temperature,
            cooling_rate: self.cooling_rate,
            iterations: self.iterations,
            cooling: self.cooling()?,
            bounds: self.bounds(),
            construction: ConstructConfig::default(),
            seed,
            time_limit_ms: None,
        };
        Ok(config)
    }

    /// Genetic Algorithm configuration; `iterations` becomes the
    /// generation count.
    pub fn ga_config(&self, seed: Option<u64>) -> GaConfig {
        GaConfig {
            population_size: self.population_size,
            generations: self.iterations,
            mutation_rate: self.mutation_rate,
            bounds: self.bounds(),
            seed,
            ..GaConfig::default()
        }
    }

    /// Hill Climbing configuration for these parameters.
    pub fn hc_config(&self, seed: Option<u64>) -> HcConfig {
        HcConfig {
            iterations: self.iterations,
            bounds: self.bounds(),
            seed,
            ..HcConfig::default()
        }
    }
}

/// Checks `params` against a guest list of `guest_count` people.
///
/// Returns the first problem found as [`SeatingError::Validation`]. The
/// check is pure: the same input always yields the same verdict and
/// message.
///
/// # Examples
///
/// ```
/// use u_seating::params::{validate_params, SearchParams};
///
/// let params = SearchParams { min_per_table: 5, max_per_table: 3, ..SearchParams::default() };
/// assert!(validate_params(&params, 20).is_err());
/// ```
pub fn validate_params(params: &SearchParams, guest_count: usize) -> Result<()> {
    let bounds = params.bounds();
    bounds.validate().map_err(SeatingError::Validation)?;

    if guest_count == 0 {
        return Err(SeatingError::Validation("there are no guests to seat".into()));
    }
    if bounds.feasible_table_counts(guest_count).is_none() {
        return Err(SeatingError::Validation(format!(
            "{guest_count} guests cannot be split into tables of {} to {} people",
            bounds.min_per_table, bounds.max_per_table
        )));
    }
    if params.initial_temperature.is_nan() || params.initial_temperature <= 0.0 {
        return Err(SeatingError::Validation(format!(
            "initial_temperature must be positive, got {}",
            params.initial_temperature
        )));
    }
    if !(params.cooling_rate > 0.0 && params.cooling_rate < 1.0) {
        return Err(SeatingError::Validation(format!(
            "cooling_rate must be in (0, 1), got {}",
            params.cooling_rate
        )));
    }
    if params.iterations == 0 {
        return Err(SeatingError::Validation(
            "iterations must be a positive integer".into(),
        ));
    }
    params.cooling()?;
    if params.population_size == 0 {
        return Err(SeatingError::Validation(
            "population_size must be a positive integer".into(),
        ));
    }
    if !(0.0..=1.0).contains(&params.mutation_rate) {
        return Err(SeatingError::Validation(format!(
            "mutation_rate must be in [0, 1], got {}",
            params.mutation_rate
        )));
    }
    Ok(())
}
