//! Tabulated views of the success curve: pity boundaries and chart samples.

use crate::core::constants::PITY_STEP;
use crate::core::types::{checkpoints_within, Category, GlobalSettings, Targets};
use crate::model::cumulative_success;
use serde::Serialize;

/// Success probability on both sides of one pity checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PityRow {
    /// 1-based checkpoint index
    pub checkpoint: u32,
    /// `F(checkpoint * STEP - 1)`
    pub before: f64,
    /// `F(checkpoint * STEP)`
    pub after: f64,
}

impl PityRow {
    /// Probability bought by the guaranteed draw itself.
    pub fn jump(&self) -> f64 {
        self.after - self.before
    }
}

/// One row per checkpoint within `n_max`.
pub fn before_after_table(
    settings: &GlobalSettings,
    targets: &Targets,
    pity_alloc: &[Category],
    n_max: u32,
) -> Vec<PityRow> {
    (1..=checkpoints_within(n_max))
        .map(|r| PityRow {
            checkpoint: r,
            before: cumulative_success(r * PITY_STEP - 1, settings, targets, pity_alloc),
            after: cumulative_success(r * PITY_STEP, settings, targets, pity_alloc),
        })
        .collect()
}

/// A sampled point of the success curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub n: u32,
    pub success: f64,
}

/// Sample `F(n)` every `stride` draws on `[0, n_max]`, plus both sides of
/// every pity checkpoint so the step at each boundary is drawn sharply.
pub fn success_curve(
    settings: &GlobalSettings,
    targets: &Targets,
    pity_alloc: &[Category],
    n_max: u32,
    stride: u32,
) -> Vec<CurvePoint> {
    let mut ns: Vec<u32> = (0..=n_max).step_by(stride.max(1) as usize).collect();
    for r in 1..=checkpoints_within(n_max) {
        ns.push(r * PITY_STEP - 1);
        ns.push(r * PITY_STEP);
    }
    ns.sort_unstable();
    ns.dedup();

    ns.into_iter()
        .map(|n| CurvePoint {
            n,
            success: cumulative_success(n, settings, targets, pity_alloc),
        })
        .collect()
}
