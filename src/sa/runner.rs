//! SA execution loop.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, warn};

use super::config::{CoolingSchedule, SaConfig, MIN_TEMPERATURE};
use crate::construct::create_balanced_seating;
use crate::cost::cost;
use crate::error::{Result, SeatingError};
use crate::model::{Arrangement, PreferenceTable};
use crate::neighbor::create_neighbor;
use crate::random::create_rng;
use crate::stop::{StopCondition, StopReason, TRACE_PREALLOC};

/// One metrics record, taken at the start of an iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaSample {
    pub iteration: usize,
    pub current_cost: f64,
    pub best_cost: f64,
    pub temperature: f64,
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best arrangement found.
    pub best: Arrangement,

    /// Cost of the best arrangement.
    pub best_cost: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Temperature when the loop ended.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Why the run ended early, if it was interrupted externally.
    pub stopped: Option<StopReason>,

    /// One sample per executed iteration, in order.
    pub trace: Vec<SaSample>,
}

/// Executes the Simulated Annealing driver.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from a freshly constructed balanced arrangement.
    pub fn run(preferences: &PreferenceTable, config: &SaConfig) -> Result<SaResult> {
        Self::run_with_cancel(preferences, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// If the flag is set, the loop stops before the next iteration and the
    /// best arrangement so far is returned.
    pub fn run_with_cancel(
        preferences: &PreferenceTable,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult> {
        config.validate().map_err(SeatingError::Validation)?;

        let mut rng = create_rng(config.seed);
        let mut stop = StopCondition::new(cancel, config.time_limit_ms);

        let mut current =
            create_balanced_seating(preferences, config.bounds, &config.construction, &mut rng)?;
        let mut current_cost = cost(&current, preferences);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut stopped = None;
        let mut trace = Vec::with_capacity(config.iterations.min(TRACE_PREALLOC));

        for iteration in 0..config.iterations {
            if temperature < MIN_TEMPERATURE {
                break;
            }
            if let Some(reason) = stop.check() {
                stopped = Some(reason);
                break;
            }

            trace.push(SaSample {
                iteration,
                current_cost,
                best_cost,
                temperature,
            });

            let neighbor = create_neighbor(&current, config.bounds, &mut rng);
            let neighbor_cost = cost(&neighbor, preferences);
            let delta = neighbor_cost - current_cost;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random_range(0.0..1.0) < (-delta / temperature).exp()
            };

            if accept {
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            iterations += 1;
            temperature = cool(temperature, config, iteration);
        }

        if let Some(reason) = stopped {
            warn!(?reason, iterations, best_cost, "simulated annealing interrupted");
        }
        debug!(
            iterations,
            accepted_moves,
            improving_moves,
            best_cost,
            final_temperature = temperature,
            "simulated annealing finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            stopped,
            trace,
        })
    }
}

/// Temperature after iteration `iteration` (0-based).
fn cool(temperature: f64, config: &SaConfig, iteration: usize) -> f64 {
    match config.cooling {
        CoolingSchedule::Exponential => temperature * config.cooling_rate,
        CoolingSchedule::Linear => {
            temperature - config.initial_temperature / config.iterations as f64
        }
        CoolingSchedule::Logarithmic => {
            config.initial_temperature / (1.0 + (1.0 + iteration as f64).ln())
        }
    }
}
