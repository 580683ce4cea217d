//! Algorithm selection and single-run dispatch.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tracing::info_span;

use super::record::{validate_params, SearchParams};
use crate::cost::SeatingReport;
use crate::error::{Result, SeatingError};
use crate::ga::{GaRunner, GaSample};
use crate::hc::{HcRunner, HcSample};
use crate::model::{Arrangement, PreferenceTable};
use crate::sa::{SaRunner, SaSample};

/// The search drivers a caller can choose from.
///
/// Displays as, and parses case-insensitively from, `"Simulated Annealing"`,
/// `"Genetic Algorithm"` and `"Hill Climbing"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    SimulatedAnnealing,
    GeneticAlgorithm,
    HillClimbing,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::SimulatedAnnealing,
        Algorithm::GeneticAlgorithm,
        Algorithm::HillClimbing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::SimulatedAnnealing => "Simulated Annealing",
            Algorithm::GeneticAlgorithm => "Genetic Algorithm",
            Algorithm::HillClimbing => "Hill Climbing",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SeatingError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SeatingError::Validation(format!("unsupported algorithm: {wanted:?}")))
    }
}

/// Per-driver metrics trace, in chronological order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetricsTrace {
    Annealing(Vec<SaSample>),
    Genetic(Vec<GaSample>),
    HillClimbing(Vec<HcSample>),
}

impl MetricsTrace {
    /// Number of samples.
    pub fn len(&self) -> usize {
        match self {
            MetricsTrace::Annealing(s) => s.len(),
            MetricsTrace::Genetic(s) => s.len(),
            MetricsTrace::HillClimbing(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything one search run produces.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    /// The best arrangement found.
    pub arrangement: Arrangement,
    /// Cost of `arrangement`.
    pub cost: f64,
    /// Score annotation for renderers.
    pub report: SeatingReport,
    pub trace: MetricsTrace,
}

/// Validates `params` and runs `algorithm` once.
///
/// # Errors
///
/// - [`SeatingError::InvalidPreferences`] if the preference table is malformed.
/// - [`SeatingError::Validation`] if a parameter is unusable.
/// - Any error of the chosen driver.
pub fn solve(
    preferences: &PreferenceTable,
    params: &SearchParams,
    algorithm: Algorithm,
    seed: Option<u64>,
) -> Result<SearchOutcome> {
    solve_with_cancel(preferences, params, algorithm, seed, None)
}

/// [`solve`] with an optional cancellation token passed to the driver.
pub fn solve_with_cancel(
    preferences: &PreferenceTable,
    params: &SearchParams,
    algorithm: Algorithm,
    seed: Option<u64>,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<SearchOutcome> {
    preferences.validate()?;
    validate_params(params, preferences.len())?;

    let _span = info_span!("solve", %algorithm, guests = preferences.len()).entered();

    let (arrangement, cost, trace) = match algorithm {
        Algorithm::SimulatedAnnealing => {
            let result = SaRunner::run_with_cancel(preferences, &params.sa_config(seed)?, cancel)?;
            (result.best, result.best_cost, MetricsTrace::Annealing(result.trace))
        }
        Algorithm::GeneticAlgorithm => {
            let result = GaRunner::run_with_cancel(preferences, &params.ga_config(seed), cancel)?;
            (result.best, result.best_cost, MetricsTrace::Genetic(result.trace))
        }
        Algorithm::HillClimbing => {
            let result = HcRunner::run_with_cancel(preferences, &params.hc_config(seed), cancel)?;
            (result.best, result.best_cost, MetricsTrace::HillClimbing(result.trace))
        }
    };

    let report = SeatingReport::new(&arrangement, preferences);
    Ok(SearchOutcome {
        algorithm,
        arrangement,
        cost,
        report,
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::score;
    use crate::model::Preferences;

    fn couples(n: usize) -> PreferenceTable {
        // Guest 2i and 2i+1 want to sit together.
        let name = |i: usize| format!("G{i:02}");
        PreferenceTable::from_entries((0..n).map(|i| {
            let partner = if i % 2 == 0 { i + 1 } else { i - 1 };
            (name(i), Preferences::new([name(partner)], Vec::<String>::new()))
        }))
    }

    fn params() -> SearchParams {
        SearchParams {
            min_per_table: 3,
            max_per_table: 5,
            iterations: 60,
            population_size: 10,
            ..SearchParams::default()
        }
    }

    #[test]
    fn test_algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!(
            "hill climbing".parse::<Algorithm>().unwrap(),
            Algorithm::HillClimbing
        );
        assert!("Tabu Search".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_solve_every_algorithm() {
        let prefs = couples(12);
        for algorithm in Algorithm::ALL {
            let outcome = solve(&prefs, &params(), algorithm, Some(42)).unwrap();
            assert_eq!(outcome.algorithm, algorithm);
            assert!(outcome.arrangement.check_complete(&prefs).is_ok());
            assert!(outcome.arrangement.respects(params().bounds()));
            assert!((outcome.report.current_score - score(&outcome.arrangement, &prefs)).abs() < 1e-9);
            assert!((outcome.report.current_score + outcome.cost).abs() < 1e-9);
            assert!(!outcome.trace.is_empty());
        }
    }

    #[test]
    fn test_solve_trace_variant_matches_algorithm() {
        let prefs = couples(12);
        let sa = solve(&prefs, &params(), Algorithm::SimulatedAnnealing, Some(1)).unwrap();
        assert!(matches!(sa.trace, MetricsTrace::Annealing(_)));
        let ga = solve(&prefs, &params(), Algorithm::GeneticAlgorithm, Some(1)).unwrap();
        assert!(matches!(ga.trace, MetricsTrace::Genetic(_)));
        let hc = solve(&prefs, &params(), Algorithm::HillClimbing, Some(1)).unwrap();
        assert!(matches!(hc.trace, MetricsTrace::HillClimbing(ref s) if s.len() == 60));
    }

    #[test]
    fn test_solve_rejects_invalid_params() {
        let prefs = couples(12);
        let bad = SearchParams {
            min_per_table: 5,
            max_per_table: 3,
            ..params()
        };
        let err = solve(&prefs, &bad, Algorithm::HillClimbing, Some(1)).unwrap_err();
        assert!(matches!(err, SeatingError::Validation(_)));
    }

    #[test]
    fn test_solve_rejects_self_reference() {
        let mut prefs = couples(6);
        prefs.insert("G00", Preferences::new(["G00"], Vec::<String>::new()));
        let err = solve(&prefs, &params(), Algorithm::HillClimbing, Some(1)).unwrap_err();
        assert!(matches!(err, SeatingError::InvalidPreferences(_)));
    }

    #[test]
    fn test_solve_is_reproducible() {
        let prefs = couples(12);
        let a = solve(&prefs, &params(), Algorithm::SimulatedAnnealing, Some(5)).unwrap();
        let b = solve(&prefs, &params(), Algorithm::SimulatedAnnealing, Some(5)).unwrap();
        assert_eq!(a.arrangement, b.arrangement);
        assert_eq!(a.trace, b.trace);
    }
}
