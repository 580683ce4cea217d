//! End-to-end scenarios on small, hand-written guest lists.

use u_seating::construct::{create_balanced_seating, ConstructConfig};
use u_seating::cost::{evaluate_seating, SeatingReport};
use u_seating::model::{PreferenceTable, Preferences, TableBounds};
use u_seating::params::{solve, validate_params, Algorithm, SearchParams};
use u_seating::random::create_rng;
use u_seating::sa::{CoolingSchedule, SaConfig, SaRunner};
use u_seating::SeatingError;

/// Routes driver logs to the test output. Set `RUST_LOG=u_seating=debug`
/// to see run summaries.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn none() -> Vec<String> {
    Vec::new()
}

fn six_with_couple() -> PreferenceTable {
    let mut table = PreferenceTable::new();
    table.add_guest("A", Preferences::new(["B"], none())).unwrap();
    table.add_guest("B", Preferences::new(["A"], none())).unwrap();
    for g in ["C", "D", "E", "F"] {
        table.add_guest(g, Preferences::default()).unwrap();
    }
    table
}

fn table_of(arrangement: &u_seating::Arrangement, guest: &str) -> usize {
    arrangement
        .tables()
        .iter()
        .position(|t| t.iter().any(|g| g == guest))
        .unwrap()
}

#[test]
fn test_couple_is_seated_together() {
    init_tracing();
    let prefs = six_with_couple();
    let bounds = TableBounds::new(2, 4);

    for seed in 0..20 {
        let mut rng = create_rng(Some(seed));
        let arrangement =
            create_balanced_seating(&prefs, bounds, &ConstructConfig::default(), &mut rng).unwrap();

        assert_eq!(arrangement.table_sizes(), vec![3, 3]);
        assert_eq!(table_of(&arrangement, "A"), table_of(&arrangement, "B"));
        assert_eq!(evaluate_seating(&arrangement, &prefs), 20.0);
    }
}

#[test]
fn test_min_above_max_rejected_before_search() {
    let params = SearchParams {
        min_per_table: 5,
        max_per_table: 3,
        ..SearchParams::default()
    };
    let err = validate_params(&params, 20).unwrap_err();
    assert!(matches!(err, SeatingError::Validation(_)));
    assert!(!err.is_fatal());

    let err = solve(&six_with_couple(), &params, Algorithm::SimulatedAnnealing, Some(1)).unwrap_err();
    assert!(matches!(err, SeatingError::Validation(_)));
}

#[test]
fn test_capacity_error_when_minimum_unreachable() {
    let prefs = PreferenceTable::from_entries(
        ["A", "B", "C", "D", "E"].map(|g| (g, Preferences::default())),
    );
    let mut rng = create_rng(Some(42));
    let err = create_balanced_seating(
        &prefs,
        TableBounds::new(3, 4),
        &ConstructConfig::default(),
        &mut rng,
    )
    .unwrap_err();

    assert_eq!(
        err,
        SeatingError::Capacity {
            guests: 5,
            tables: 2,
            min_per_table: 3,
        }
    );
}

#[test]
fn test_linear_cooling_terminates_by_last_iteration() {
    init_tracing();
    let prefs = six_with_couple();
    let config = SaConfig::default()
        .with_bounds(TableBounds::new(2, 4))
        .with_cooling(CoolingSchedule::Linear)
        .with_initial_temperature(100.0)
        .with_iterations(100)
        .with_seed(42);
    let result = SaRunner::run(&prefs, &config).unwrap();

    assert!(result.iterations <= 100);
    assert!(result.final_temperature <= 1e-9);
    let last = result.trace.last().unwrap();
    assert!((last.temperature - 1.0).abs() < 1e-9);
}

#[test]
fn test_every_algorithm_keeps_the_couple_together() {
    init_tracing();
    let prefs = six_with_couple();
    let params = SearchParams {
        min_per_table: 2,
        max_per_table: 4,
        iterations: 200,
        population_size: 20,
        ..SearchParams::default()
    };

    for algorithm in Algorithm::ALL {
        let outcome = solve(&prefs, &params, algorithm, Some(3)).unwrap();
        let a = table_of(&outcome.arrangement, "A");
        assert_eq!(a, table_of(&outcome.arrangement, "B"), "{algorithm}");
        assert_eq!(outcome.report.perfect_score, 20.0);
        assert_eq!(outcome.report.optimality_percent, Some(100.0));
    }
}

#[test]
fn test_report_without_preferences_omits_percentage() {
    let prefs = PreferenceTable::from_entries(
        ["A", "B", "C", "D"].map(|g| (g, Preferences::default())),
    );
    let params = SearchParams {
        min_per_table: 2,
        max_per_table: 2,
        iterations: 10,
        ..SearchParams::default()
    };
    let outcome = solve(&prefs, &params, Algorithm::HillClimbing, Some(1)).unwrap();
    let report = SeatingReport::new(&outcome.arrangement, &prefs);

    assert_eq!(report.perfect_score, 0.0);
    assert_eq!(report.optimality_percent, None);
    assert_eq!(report.tables.len(), 2);
}

#[test]
fn test_guest_added_between_runs() {
    init_tracing();
    let mut prefs = six_with_couple();
    prefs
        .add_guest("G", Preferences::new(["C"], ["A"]))
        .unwrap();
    assert!(prefs.add_guest("G", Preferences::default()).is_err());

    let params = SearchParams {
        min_per_table: 2,
        max_per_table: 4,
        iterations: 100,
        ..SearchParams::default()
    };
    let outcome = solve(&prefs, &params, Algorithm::HillClimbing, Some(9)).unwrap();
    assert_eq!(outcome.arrangement.guest_count(), 7);
    assert!(outcome.arrangement.check_complete(&prefs).is_ok());
}
