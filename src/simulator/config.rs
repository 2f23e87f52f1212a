//! Scenario runner configuration.

use crate::core::constants::{DEFAULT_MC_SAMPLES, DEFAULT_QUANTILES};
use crate::scenario::Scenario;

/// Configuration for a plan report run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Targets, settings and resources to evaluate
    pub scenario: Scenario,

    /// Quantiles to invert on the success curve
    pub quantiles: Vec<f64>,

    /// Horizon override (None = 200 draws per wanted item)
    pub max_draws: Option<u32>,

    /// Monte Carlo samples per point (0 = skip the cross-check)
    pub mc_samples: u32,

    /// Seed for the Monte Carlo LCG
    pub mc_seed: u32,

    /// Number of single-run replays to summarise (0 = skip)
    pub replay_runs: u32,

    /// Random seed for replays (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario::default(),
            quantiles: DEFAULT_QUANTILES.to_vec(),
            max_draws: None,
            mc_samples: DEFAULT_MC_SAMPLES,
            mc_seed: 0,
            replay_runs: 0,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Analytic numbers only: no sampling, no replays
    pub fn analytic(scenario: Scenario) -> Self {
        Self {
            scenario,
            mc_samples: 0,
            replay_runs: 0,
            ..Default::default()
        }
    }

    /// Analytic numbers plus a Monte Carlo cross-check
    pub fn cross_check(scenario: Scenario, mc_samples: u32) -> Self {
        Self {
            scenario,
            mc_samples,
            ..Default::default()
        }
    }

    /// Batch of seeded replays for reproducible summaries
    pub fn replay_batch(scenario: Scenario, runs: u32, seed: u64) -> Self {
        Self {
            scenario,
            mc_samples: 0,
            replay_runs: runs,
            seed: Some(seed),
            ..Default::default()
        }
    }
}
