//! Repeated-run benchmarking.
//!
//! [`run_benchmark`] solves the same instance several times with
//! independent seeds and summarizes the spread of scores.
//! [`compare_algorithms`] does the same for several drivers. Persisting or
//! plotting the summaries is left to the caller.

use tracing::info;

use crate::cost::{optimality_percent, theoretical_perfect_score};
use crate::error::{Result, SeatingError};
use crate::model::PreferenceTable;
use crate::params::{solve, validate_params, Algorithm, SearchParams};
use crate::random::{create_rng, derive_seeds};

/// Outcome of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunRecord {
    pub cost: f64,
    pub score: f64,
    /// `None` when the perfect score is zero.
    pub optimality_percent: Option<f64>,
}

/// Summary of all runs of one algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkSummary {
    pub algorithm: Algorithm,
    /// One record per run, in run order.
    pub runs: Vec<RunRecord>,
    pub average_score: f64,
    pub best_score: f64,
    pub worst_score: f64,
    /// Lowest cost over all runs.
    pub best_cost: f64,
}

impl BenchmarkSummary {
    fn from_runs(algorithm: Algorithm, runs: Vec<RunRecord>) -> Self {
        let scores = runs.iter().map(|r| r.score);
        let best_score = scores.clone().fold(f64::NEG_INFINITY, f64::max);
        let worst_score = scores.clone().fold(f64::INFINITY, f64::min);
        let average_score = scores.sum::<f64>() / runs.len() as f64;
        let best_cost = runs.iter().map(|r| r.cost).fold(f64::INFINITY, f64::min);
        Self {
            algorithm,
            runs,
            average_score,
            best_score,
            worst_score,
            best_cost,
        }
    }
}

/// Runs `algorithm` `runs` times with independent seeds derived from `seed`.
///
/// # Errors
///
/// Fails with [`SeatingError::Validation`] if `runs` is zero or `params`
/// is invalid, and with the first driver error otherwise.
pub fn run_benchmark(
    preferences: &PreferenceTable,
    params: &SearchParams,
    algorithm: Algorithm,
    runs: usize,
    seed: Option<u64>,
) -> Result<BenchmarkSummary> {
    if runs == 0 {
        return Err(SeatingError::Validation("runs must be at least 1".into()));
    }
    validate_params(params, preferences.len())?;

    let perfect_score = theoretical_perfect_score(preferences);
    let mut rng = create_rng(seed);
    let seeds = derive_seeds(&mut rng, runs);

    let mut records = Vec::with_capacity(runs);
    for (i, run_seed) in seeds.into_iter().enumerate() {
        info!(%algorithm, run = i + 1, runs, "benchmark run");
        let outcome = solve(preferences, params, algorithm, Some(run_seed))?;
        let score = -outcome.cost;
        records.push(RunRecord {
            cost: outcome.cost,
            score,
            optimality_percent: optimality_percent(score, perfect_score),
        });
    }

    Ok(BenchmarkSummary::from_runs(algorithm, records))
}

/// Benchmarks each algorithm in turn. Summaries follow the input order.
pub fn compare_algorithms(
    preferences: &PreferenceTable,
    algorithms: &[Algorithm],
    params: &SearchParams,
    runs: usize,
    seed: Option<u64>,
) -> Result<Vec<BenchmarkSummary>> {
    let mut rng = create_rng(seed);
    let seeds = derive_seeds(&mut rng, algorithms.len());
    algorithms
        .iter()
        .zip(seeds)
        .map(|(&algorithm, s)| run_benchmark(preferences, params, algorithm, runs, Some(s)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Preferences;

    fn guests() -> PreferenceTable {
        let name = |i: usize| format!("G{:02}", i % 10);
        PreferenceTable::from_entries((0..10).map(|i| {
            (
                name(i),
                Preferences::new([name(i + 1)], [name(i + 5)]),
            )
        }))
    }

    fn params() -> SearchParams {
        SearchParams {
            min_per_table: 2,
            max_per_table: 4,
            iterations: 40,
            population_size: 8,
            ..SearchParams::default()
        }
    }

    #[test]
    fn test_benchmark_summary_statistics() {
        let summary =
            run_benchmark(&guests(), &params(), Algorithm::HillClimbing, 4, Some(42)).unwrap();

        assert_eq!(summary.runs.len(), 4);
        assert!(summary.best_score >= summary.average_score);
        assert!(summary.average_score >= summary.worst_score);
        assert!((summary.best_cost + summary.best_score).abs() < 1e-9);
        for run in &summary.runs {
            assert!((run.score + run.cost).abs() < 1e-9);
            assert!(run.optimality_percent.is_some());
        }
    }

    #[test]
    fn test_benchmark_no_preferences_has_no_optimality() {
        let prefs = PreferenceTable::from_entries(
            ["A", "B", "C", "D"].map(|g| (g, Preferences::default())),
        );
        let summary =
            run_benchmark(&prefs, &params(), Algorithm::HillClimbing, 2, Some(1)).unwrap();
        assert!(summary.runs.iter().all(|r| r.optimality_percent.is_none()));
    }

    #[test]
    fn test_benchmark_reproducible() {
        let a = run_benchmark(&guests(), &params(), Algorithm::SimulatedAnnealing, 3, Some(7))
            .unwrap();
        let b = run_benchmark(&guests(), &params(), Algorithm::SimulatedAnnealing, 3, Some(7))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_benchmark_zero_runs() {
        let err = run_benchmark(&guests(), &params(), Algorithm::HillClimbing, 0, None).unwrap_err();
        assert!(matches!(err, SeatingError::Validation(_)));
    }

    #[test]
    fn test_compare_keeps_input_order() {
        let order = [Algorithm::HillClimbing, Algorithm::GeneticAlgorithm];
        let summaries = compare_algorithms(&guests(), &order, &params(), 2, Some(3)).unwrap();
        let got: Vec<Algorithm> = summaries.iter().map(|s| s.algorithm).collect();
        assert_eq!(got, order);
    }
}
