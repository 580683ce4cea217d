//! Caller-facing search parameters and algorithm dispatch.
//!
//! [`SearchParams`] is the single configuration record a front end fills
//! in. [`validate_params`] rejects unusable values before any search
//! begins, and [`solve`] turns the record into the configuration of the
//! chosen driver and runs it.
//!
//! # Example
//!
//! ```
//! use u_seating::model::{PreferenceTable, Preferences};
//! use u_seating::params::{solve, Algorithm, SearchParams};
//!
//! let guests = PreferenceTable::from_entries(
//!     ["A", "B", "C", "D", "E", "F"]
//!         .into_iter()
//!         .map(|g| (g, Preferences::default())),
//! );
//! let params = SearchParams {
//!     min_per_table: 2,
//!     max_per_table: 4,
//!     iterations: 50,
//!     ..SearchParams::default()
//! };
//! let outcome = solve(&guests, &params, Algorithm::HillClimbing, Some(7)).unwrap();
//! assert_eq!(outcome.arrangement.guest_count(), 6);
//! ```

mod dispatch;
mod record;

pub use dispatch::{solve, solve_with_cancel, Algorithm, MetricsTrace, SearchOutcome};
pub use record::{validate_params, SearchParams};
