//! Headless simulator for tuning the world constants.
//!
//! Plays many sessions with a scripted autopilot through the same `Session`
//! the terminal game uses, on a simulated clock, and reports score and crash
//! statistics.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::{should_flap, target_line};
pub use config::SimConfig;
pub use report::{RunOutcome, RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
