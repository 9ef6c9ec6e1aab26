//! Monte Carlo balance simulator.
//!
//! Runs many full campaigns through the same engine the binary uses and
//! aggregates how far they get:
//! - How often the final boss falls
//! - How many battles a run lasts
//! - Level reached and healing item economy
//! - Stalled battles (mutual zero damage)

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, RunStats};
