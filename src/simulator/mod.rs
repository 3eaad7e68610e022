//! Game balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of scripted sessions to analyze:
//! - How often a run clears the whole roster
//! - Level, gold and power at the end of a run
//! - How much the store changes the odds
//!
//! Every run drives a real `Session`, so simulation results match real
//! gameplay behavior.

mod config;
mod report;
mod runner;
mod stats;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run};
pub use stats::{RunOutcome, RunStats};
