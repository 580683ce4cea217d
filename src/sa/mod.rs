//! Simulated Annealing (SA).
//!
//! Starts from a balanced arrangement and walks the neighbor graph,
//! always accepting improvements and accepting a worsening of `delta`
//! with probability `exp(-delta / T)`. The temperature `T` cools after
//! every iteration on one of three schedules; the run ends when the
//! iteration budget is spent or `T` drops below [`MIN_TEMPERATURE`].
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig, MIN_TEMPERATURE};
pub use runner::{SaResult, SaRunner, SaSample};
