//! Hill Climbing execution loop.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tracing::{debug, warn};

use super::config::HcConfig;
use crate::construct::create_balanced_seating;
use crate::cost::cost;
use crate::error::{Result, SeatingError};
use crate::model::{Arrangement, PreferenceTable};
use crate::neighbor::create_neighbor;
use crate::random::create_rng;
use crate::stop::{StopCondition, StopReason, TRACE_PREALLOC};

/// Cost of the neighbor evaluated at one iteration, accepted or not.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcSample {
    pub iteration: usize,
    pub neighbor_cost: f64,
}

/// Result of a Hill Climbing run.
#[derive(Debug, Clone)]
pub struct HcResult {
    /// The best arrangement found.
    pub best: Arrangement,

    /// Cost of the best arrangement.
    pub best_cost: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Number of accepted (strictly improving) neighbors.
    pub improving_moves: usize,

    /// Why the run ended early, if it was interrupted externally.
    pub stopped: Option<StopReason>,

    /// One neighbor-cost sample per executed iteration.
    pub trace: Vec<HcSample>,

    /// Best cost after each executed iteration. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Executes the Hill Climbing driver.
///
/// # Usage
///
/// ```ignore
/// let config = HcConfig::default().with_bounds(TableBounds::new(2, 4)).with_seed(42);
/// let result = HcRunner::run(&preferences, &config)?;
/// ```
pub struct HcRunner;

impl HcRunner {
    /// Runs Hill Climbing from a freshly constructed balanced arrangement.
    pub fn run(preferences: &PreferenceTable, config: &HcConfig) -> Result<HcResult> {
        Self::run_with_cancel(preferences, config, None)
    }

    /// Runs Hill Climbing with an optional cancellation token.
    pub fn run_with_cancel(
        preferences: &PreferenceTable,
        config: &HcConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<HcResult> {
        config.validate().map_err(SeatingError::Validation)?;

        let mut rng = create_rng(config.seed);
        let mut stop = StopCondition::new(cancel, config.time_limit_ms);

        let mut current =
            create_balanced_seating(preferences, config.bounds, &config.construction, &mut rng)?;
        let mut current_cost = cost(&current, preferences);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut iterations = 0usize;
        let mut improving_moves = 0usize;
        let mut stopped = None;
        let reserve = config.iterations.min(TRACE_PREALLOC);
        let mut trace = Vec::with_capacity(reserve);
        let mut cost_history = Vec::with_capacity(reserve);

        for iteration in 0..config.iterations {
            if let Some(reason) = stop.check() {
                stopped = Some(reason);
                break;
            }

            let neighbor = create_neighbor(&current, config.bounds, &mut rng);
            let neighbor_cost = cost(&neighbor, preferences);
            trace.push(HcSample {
                iteration,
                neighbor_cost,
            });

            if neighbor_cost < current_cost {
                current = neighbor;
                current_cost = neighbor_cost;
                improving_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            }

            cost_history.push(best_cost);
            iterations += 1;
        }

        if let Some(reason) = stopped {
            warn!(?reason, iterations, best_cost, "hill climbing interrupted");
        }
        debug!(iterations, improving_moves, best_cost, "hill climbing finished");

        Ok(HcResult {
            best,
            best_cost,
            iterations,
            improving_moves,
            stopped,
            trace,
            cost_history,
        })
    }
}
