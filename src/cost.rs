//! Cost and score model.
//!
//! The cost of an arrangement (lower is better) has two parts:
//!
//! 1. **Preferences**: for every guest `g` at table `T`, add
//!    [`PENALTY_WEIGHT`] per entry of `g.avoids` seated at `T` and subtract
//!    [`REWARD_WEIGHT`] per entry of `g.prefers` seated at `T`. A
//!    relationship listed by both parties is counted from both sides, so
//!    mutual preferences weigh twice as much as one-sided ones.
//! 2. **Balance**: `IMBALANCE_WEIGHT * spread` when the largest and smallest
//!    tables differ by more than one guest, plus
//!    `DEVIATION_WEIGHT * |size - mean|` for every table.
//!
//! The user-facing score is the negated cost.

use std::collections::HashSet;

use crate::model::{Arrangement, PreferenceTable, Table};

/// Reward per satisfied `prefers` entry.
pub const REWARD_WEIGHT: f64 = 10.0;

/// Penalty per violated `avoids` entry.
pub const PENALTY_WEIGHT: f64 = 20.0;

/// Penalty per guest of spread when table sizes differ by more than one.
pub const IMBALANCE_WEIGHT: f64 = 200.0;

/// Penalty per guest of deviation from the mean table size.
pub const DEVIATION_WEIGHT: f64 = 20.0;

/// Total cost of an arrangement. Lower is better; may be negative.
pub fn cost(arrangement: &Arrangement, preferences: &PreferenceTable) -> f64 {
    preference_cost(arrangement, preferences) + balance_cost(arrangement)
}

/// User-facing score: exactly `-cost`.
pub fn score(arrangement: &Arrangement, preferences: &PreferenceTable) -> f64 {
    -cost(arrangement, preferences)
}

/// Preference-only score: `+10` per satisfied and `-20` per violated entry,
/// without the balance term.
///
/// Used to rank candidates whose table sizes are already fixed.
pub fn evaluate_seating(arrangement: &Arrangement, preferences: &PreferenceTable) -> f64 {
    -preference_cost(arrangement, preferences)
}

/// Upper bound on the score: every `prefers` entry satisfied, `avoids`
/// ignored. Not always reachable.
pub fn theoretical_perfect_score(preferences: &PreferenceTable) -> f64 {
    let entries: usize = preferences.iter().map(|(_, p)| p.prefers.len()).sum();
    REWARD_WEIGHT * entries as f64
}

/// `score / perfect * 100`, or `None` when the perfect score is zero.
pub fn optimality_percent(score: f64, perfect_score: f64) -> Option<f64> {
    if perfect_score == 0.0 {
        None
    } else {
        Some(score / perfect_score * 100.0)
    }
}

fn preference_cost(arrangement: &Arrangement, preferences: &PreferenceTable) -> f64 {
    let mut total = 0.0;
    for table in arrangement.tables() {
        let seated: HashSet<&str> = table.iter().map(String::as_str).collect();
        for guest in table {
            let Some(prefs) = preferences.get(guest) else {
                continue;
            };
            let avoided = prefs
                .avoids
                .iter()
                .filter(|g| seated.contains(g.as_str()))
                .count();
            let preferred = prefs
                .prefers
                .iter()
                .filter(|g| seated.contains(g.as_str()))
                .count();
            total += PENALTY_WEIGHT * avoided as f64 - REWARD_WEIGHT * preferred as f64;
        }
    }
    total
}

fn balance_cost(arrangement: &Arrangement) -> f64 {
    if arrangement.num_tables() == 0 {
        return 0.0;
    }
    let mut total = 0.0;
    let spread = arrangement.size_spread();
    if spread > 1 {
        total += IMBALANCE_WEIGHT * spread as f64;
    }
    let mean = arrangement.guest_count() as f64 / arrangement.num_tables() as f64;
    total += arrangement
        .tables()
        .iter()
        .map(|t| DEVIATION_WEIGHT * (t.len() as f64 - mean).abs())
        .sum::<f64>();
    total
}

/// Score annotation for an arrangement, as consumed by renderers and
/// report writers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatingReport {
    /// Guests per table.
    pub tables: Vec<Table>,

    /// Score of the arrangement (`-cost`).
    pub current_score: f64,

    /// [`theoretical_perfect_score`] of the preference table.
    pub perfect_score: f64,

    /// `current_score / perfect_score * 100`; `None` when no guest has
    /// any preference.
    pub optimality_percent: Option<f64>,
}

impl SeatingReport {
    pub fn new(arrangement: &Arrangement, preferences: &PreferenceTable) -> Self {
        let current_score = score(arrangement, preferences);
        let perfect_score = theoretical_perfect_score(preferences);
        Self {
            tables: arrangement.tables().to_vec(),
            current_score,
            perfect_score,
            optimality_percent: optimality_percent(current_score, perfect_score),
        }
    }
}
