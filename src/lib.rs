//! Seating-arrangement optimization.
//!
//! Seats a list of guests at tables of bounded size so that guests sit
//! with the people they prefer and away from the people they avoid, while
//! keeping table sizes balanced. Three search drivers share one cost model
//! and one neighborhood:
//!
//! - **Simulated Annealing (SA)**: Metropolis acceptance with exponential,
//!   linear or logarithmic cooling.
//! - **Genetic Algorithm (GA)**: Tournament selection, validity-preserving
//!   crossover and swap mutation with elitist replacement.
//! - **Hill Climbing (HC)**: Greedy acceptance of strictly better neighbors.
//!
//! # Architecture
//!
//! - [`model`]: Guests, preferences, arrangements and table bounds
//! - [`cost`]: Cost, score and report annotations
//! - [`construct`]: Balanced initial arrangements
//! - [`neighbor`]: Capacity-safe local moves
//! - [`sa`], [`ga`], [`hc`]: Search drivers
//! - [`params`]: Caller-facing parameter record, validation and dispatch
//! - [`benchmark`]: Repeated runs and algorithm comparison
//!
//! # Example
//!
//! ```
//! use u_seating::model::{PreferenceTable, Preferences};
//! use u_seating::params::{solve, Algorithm, SearchParams};
//!
//! let mut guests = PreferenceTable::new();
//! guests.add_guest("Ana", Preferences::new(["Rui"], ["Eva"])).unwrap();
//! guests.add_guest("Rui", Preferences::new(["Ana"], Vec::<String>::new())).unwrap();
//! for name in ["Eva", "Tom", "Zoe", "Ivo"] {
//!     guests.add_guest(name, Preferences::default()).unwrap();
//! }
//!
//! let params = SearchParams {
//!     min_per_table: 2,
//!     max_per_table: 4,
//!     iterations: 200,
//!     ..SearchParams::default()
//! };
//! let outcome = solve(&guests, &params, Algorithm::SimulatedAnnealing, Some(42)).unwrap();
//! assert!(outcome.arrangement.check_complete(&guests).is_ok());
//! ```

pub mod benchmark;
pub mod construct;
pub mod cost;
pub mod error;
pub mod ga;
pub mod hc;
pub mod model;
pub mod neighbor;
pub mod params;
pub mod random;
pub mod sa;
pub mod stop;

pub use error::{Result, SeatingError};
pub use model::{Arrangement, PreferenceTable, Preferences, TableBounds};
pub use params::{solve, validate_params, Algorithm, SearchParams};
