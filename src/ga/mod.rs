//! Genetic Algorithm (GA) over seating arrangements.
//!
//! Each generation draws parent pairs by tournament, produces two children
//! per pair (one per parent order) with [`operators::crossover`], mutates
//! each child with probability `mutation_rate`, and keeps the cheapest
//! `population_size` individuals out of the offspring plus a small elite
//! of the previous generation.
//!
//! Every individual is checked for completeness after construction and
//! after every generation. A violation aborts the run.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best arrangement and checkpoint trace
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, GaSample};
