//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! construction → selection → crossover → mutation → elitist replacement
//! → repeat.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, warn};

use super::config::GaConfig;
use super::operators::{crossover, mutate};
use super::selection::tournament_pair;
use crate::construct::create_balanced_seating;
use crate::cost::cost;
use crate::error::{Result, SeatingError};
use crate::model::{Arrangement, PreferenceTable};
use crate::random::{create_rng, derive_seeds};
use crate::stop::{StopCondition, StopReason};

/// Best cost of the population at a checkpoint generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaSample {
    pub generation: usize,
    pub best_cost: f64,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The lowest-cost arrangement of the final population.
    pub best: Arrangement,

    /// Cost of `best`.
    pub best_cost: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Why the run ended early, if it was interrupted externally.
    pub stopped: Option<StopReason>,

    /// Best cost every `checkpoint_interval` generations, plus a final
    /// sample after the last generation.
    pub trace: Vec<GaSample>,
}

#[derive(Debug, Clone)]
struct Scored {
    arrangement: Arrangement,
    cost: f64,
}

impl Scored {
    fn new(arrangement: Arrangement, preferences: &PreferenceTable) -> Self {
        let cost = cost(&arrangement, preferences);
        Self { arrangement, cost }
    }
}

/// Executes the GA driver.
///
/// # Usage
///
/// ```ignore
/// let config = GaConfig::default().with_bounds(TableBounds::new(4, 6)).with_seed(42);
/// let result = GaRunner::run(&preferences, &config)?;
/// println!("Best cost: {}", result.best_cost);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA.
    pub fn run(preferences: &PreferenceTable, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_cancel(preferences, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If the flag is set, the GA stops before the next generation and
    /// returns the best individual of the current population.
    ///
    /// # Errors
    ///
    /// Validation and capacity errors are returned before any search.
    /// An individual that omits or duplicates a guest aborts the run with
    /// a fatal invariant error.
    pub fn run_with_cancel(
        preferences: &PreferenceTable,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate().map_err(SeatingError::Validation)?;

        let mut rng = create_rng(config.seed);
        let mut stop = StopCondition::new(cancel, config.time_limit_ms);

        let mut population = initial_population(preferences, config, &mut rng)?;
        let mut trace = Vec::new();
        let mut generations = 0usize;
        let mut stopped = None;

        for generation in 0..config.generations {
            if let Some(reason) = stop.check() {
                stopped = Some(reason);
                break;
            }
            if generation % config.checkpoint_interval == 0 {
                trace.push(GaSample {
                    generation,
                    best_cost: find_best(&population)?.cost,
                });
            }

            population = next_generation(&population, preferences, config, &mut rng)?;
            generations += 1;
        }

        let best = find_best(&population)?.clone();
        if trace.last().is_none_or(|s| s.generation != generations) {
            trace.push(GaSample {
                generation: generations,
                best_cost: best.cost,
            });
        }

        if let Some(reason) = stopped {
            warn!(?reason, generations, best_cost = best.cost, "genetic algorithm interrupted");
        }
        debug!(
            generations,
            population = config.population_size,
            best_cost = best.cost,
            "genetic algorithm finished"
        );

        Ok(GaResult {
            best_cost: best.cost,
            best: best.arrangement,
            generations,
            stopped,
            trace,
        })
    }
}

/// Builds `population_size` independent balanced arrangements.
fn initial_population<R: Rng>(
    preferences: &PreferenceTable,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Vec<Scored>> {
    let seeds = derive_seeds(rng, config.population_size);
    let build = |seed: &u64| -> Result<Scored> {
        let mut individual_rng = StdRng::seed_from_u64(*seed);
        let arrangement = create_balanced_seating(
            preferences,
            config.bounds,
            &config.construction,
            &mut individual_rng,
        )?;
        arrangement.check_complete(preferences)?;
        Ok(Scored::new(arrangement, preferences))
    };

    if config.parallel {
        seeds.par_iter().map(build).collect()
    } else {
        seeds.iter().map(build).collect()
    }
}

/// Produces the next generation: offspring from tournament-selected
/// parent pairs (both parent orders), then the cheapest
/// `population_size` of `elite ∪ offspring`.
fn next_generation<R: Rng>(
    population: &[Scored],
    preferences: &PreferenceTable,
    config: &GaConfig,
    rng: &mut R,
) -> Result<Vec<Scored>> {
    let costs: Vec<f64> = population.iter().map(|s| s.cost).collect();
    let plans: Vec<(usize, usize, u64)> = (0..config.population_size.div_ceil(2))
        .map(|_| {
            let (a, b) = tournament_pair(&costs, config.tournament_size, rng);
            (a, b, rng.random())
        })
        .collect();

    let breed = |&(a, b, seed): &(usize, usize, u64)| -> Result<[Scored; 2]> {
        let mut child_rng = StdRng::seed_from_u64(seed);
        let [c1, c2] = offspring(
            &population[a].arrangement,
            &population[b].arrangement,
            preferences,
            config.mutation_rate,
            &mut child_rng,
        )?;
        Ok([Scored::new(c1, preferences), Scored::new(c2, preferences)])
    };

    let children: Vec<[Scored; 2]> = if config.parallel {
        plans.par_iter().map(breed).collect::<Result<_>>()?
    } else {
        plans.iter().map(breed).collect::<Result<_>>()?
    };

    let mut pool = elite(population, config.elite_count);
    pool.extend(
        children
            .into_iter()
            .flatten()
            .take(config.population_size),
    );
    sort_by_cost(&mut pool);
    pool.truncate(config.population_size);

    for individual in &pool {
        individual.arrangement.check_complete(preferences)?;
    }
    Ok(pool)
}

/// Two children, one per parent order. Each child gets a mutation attempt
/// with probability `mutation_rate`.
fn offspring<R: Rng>(
    p1: &Arrangement,
    p2: &Arrangement,
    preferences: &PreferenceTable,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<[Arrangement; 2]> {
    let mut children = [crossover(p1, p2, preferences)?, crossover(p2, p1, preferences)?];
    for child in &mut children {
        if rng.random_bool(mutation_rate) {
            mutate(child, rng);
        }
    }
    Ok(children)
}

/// The `count` lowest-cost individuals, cheapest first.
fn elite(population: &[Scored], count: usize) -> Vec<Scored> {
    let mut sorted = population.to_vec();
    sort_by_cost(&mut sorted);
    sorted.truncate(count);
    sorted
}

fn sort_by_cost(individuals: &mut [Scored]) {
    individuals.sort_by(|a, b| {
        a.cost
            .partial_cmp(&b.cost)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Find the individual with the lowest cost (first on ties).
fn find_best(population: &[Scored]) -> Result<&Scored> {
    population
        .iter()
        .reduce(|best, s| if s.cost < best.cost { s } else { best })
        .ok_or(SeatingError::EmptyPopulation)
}

// ============================================================================
// Tests
// ============================================================================
