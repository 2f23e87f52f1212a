//! Sampling side of the engine.
//!
//! - Monte Carlo cross-check of the analytic curve (seeded LCG)
//! - Step-wise single-run simulation and its replay controller
//! - Scenario runner producing a [`PlanReport`]
//!
//! The analytic model never depends on anything in here.

mod config;
pub mod monte_carlo;
mod replay;
mod report;
pub mod rng;
mod runner;
pub mod single_run;

pub use config::SimConfig;
pub use monte_carlo::{monte_carlo_curve, monte_carlo_points, monte_carlo_success};
pub use replay::{Replay, RunEnd};
pub use report::{McPoint, PlanReport, ReplayOutcome, ReplaySummary};
pub use rng::Lcg;
pub use runner::run_plan;
pub use single_run::{DrawSource, SimEvent, SimPoint, SingleRun, StepOutcome};
