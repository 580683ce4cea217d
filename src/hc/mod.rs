//! Hill Climbing (HC).
//!
//! Greedy local search: generate one neighbor per iteration and accept it
//! only if it is strictly cheaper than the current arrangement. The best
//! cost can therefore only stay flat or fall.

mod config;
mod runner;

pub use config::HcConfig;
pub use runner::{HcResult, HcRunner, HcSample};
