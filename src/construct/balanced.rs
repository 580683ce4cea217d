//! Balanced seating constructor.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use super::config::ConstructConfig;
use crate::cost::evaluate_seating;
use crate::error::{Result, SeatingError};
use crate::model::{even_sizes, Arrangement, GuestId, PreferenceTable, TableBounds};
use crate::random::derive_seeds;

/// Computes the table-size sequence for `guests` people.
///
/// # Algorithm
///
/// 1. Start from `ceil(guests / max_per_table)` tables.
/// 2. Fail with [`SeatingError::Capacity`] if that many tables cannot all
///    reach `min_per_table`.
/// 3. Split evenly (the first `guests % tables` tables get one extra seat).
///    Add a table while the largest exceeds `max_per_table`; drop one while
///    the smallest is under `min_per_table` and one fewer table still fits
///    under `max_per_table`.
pub fn plan_table_sizes(guests: usize, bounds: TableBounds) -> Result<Vec<usize>> {
    bounds.validate().map_err(SeatingError::Validation)?;
    if guests == 0 {
        return Err(SeatingError::Validation("no guests to seat".into()));
    }

    let mut tables = guests.div_ceil(bounds.max_per_table);
    let capacity_error = |tables| SeatingError::Capacity {
        guests,
        tables,
        min_per_table: bounds.min_per_table,
    };
    if tables * bounds.min_per_table > guests {
        return Err(capacity_error(tables));
    }

    loop {
        let base = guests / tables;
        let largest = base + usize::from(guests % tables > 0);
        if largest > bounds.max_per_table {
            tables += 1;
        } else if base < bounds.min_per_table
            && tables > 1
            && guests.div_ceil(tables - 1) <= bounds.max_per_table
        {
            tables -= 1;
        } else {
            break;
        }
    }

    let sizes = even_sizes(guests, tables);
    if sizes.iter().all(|&s| bounds.contains(s)) {
        Ok(sizes)
    } else {
        Err(capacity_error(tables))
    }
}

/// Builds a size-balanced arrangement and improves it by random re-dealing.
///
/// All guests are shuffled and dealt into the sizes from
/// [`plan_table_sizes`]. Then `config.trials` independent re-deals of the
/// same guests into the same sizes are scored with [`evaluate_seating`];
/// the best one replaces the initial deal only if it scores strictly
/// higher. Ties go to the earliest trial.
///
/// Table sizes of the result differ by at most one.
pub fn create_balanced_seating<R: Rng>(
    preferences: &PreferenceTable,
    bounds: TableBounds,
    config: &ConstructConfig,
    rng: &mut R,
) -> Result<Arrangement> {
    let sizes = plan_table_sizes(preferences.len(), bounds)?;

    let mut guests: Vec<GuestId> = preferences.guests().cloned().collect();
    guests.shuffle(rng);
    let initial = Arrangement::from_sizes(guests, &sizes);
    let initial_score = evaluate_seating(&initial, preferences);

    let seeds = derive_seeds(rng, config.trials);
    let redeal = |seed: &u64| {
        let mut trial_rng = StdRng::seed_from_u64(*seed);
        let mut flat = initial.flatten();
        flat.shuffle(&mut trial_rng);
        let candidate = Arrangement::from_sizes(flat, &sizes);
        (evaluate_seating(&candidate, preferences), candidate)
    };
    let better = |a: (f64, Arrangement), b: (f64, Arrangement)| if b.0 > a.0 { b } else { a };

    let best_trial = if config.parallel {
        seeds.par_iter().map(redeal).reduce_with(better)
    } else {
        seeds.iter().map(redeal).reduce(better)
    };

    let (best_score, best) = match best_trial {
        Some((score, candidate)) if score > initial_score => (score, candidate),
        _ => (initial_score, initial),
    };

    debug!(
        guests = preferences.len(),
        tables = sizes.len(),
        trials = config.trials,
        initial_score,
        best_score,
        "balanced seating constructed"
    );

    Ok(best)
}
