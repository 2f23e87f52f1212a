//! Inverse lookups on the success curve.

use crate::core::constants::{PITY_ESTIMATE_QUANTILE, PITY_STEP};
use crate::core::types::{Category, GlobalSettings, Targets};
use crate::model::cumulative_success;
use serde::Serialize;
use tracing::warn;

/// Draws needed to reach a quantile, and whether it was reached at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuantileRow {
    pub q: f64,
    pub draws: u32,
    /// False when `draws` is only the horizon cap.
    pub reachable: bool,
}

impl QuantileRow {
    pub fn compute(
        q: f64,
        settings: &GlobalSettings,
        targets: &Targets,
        pity_alloc: &[Category],
        n_max: u32,
    ) -> Self {
        let draws = find_n_for_quantile(q, settings, targets, pity_alloc, n_max);
        let reachable = cumulative_success(draws, settings, targets, pity_alloc) >= q;
        Self {
            q,
            draws,
            reachable,
        }
    }
}

/// Smallest `n` in `[0, n_max]` with `F(n) >= q`.
///
/// Binary search relies on `F` being non-decreasing in `n`. Returns `n_max`
/// when `q` is not reached within the horizon; callers must read that as
/// "unreachable", not as an exact answer.
pub fn find_n_for_quantile(
    q: f64,
    settings: &GlobalSettings,
    targets: &Targets,
    pity_alloc: &[Category],
    n_max: u32,
) -> u32 {
    let (mut lo, mut hi) = (0u32, n_max);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if cumulative_success(mid, settings, targets, pity_alloc) >= q {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    if lo == n_max && cumulative_success(lo, settings, targets, pity_alloc) < q {
        warn!(q, n_max, "quantile not reached within horizon");
    }
    lo
}

/// Checkpoints needed for a 90% chance of success.
pub fn estimate_pity_needed(
    settings: &GlobalSettings,
    targets: &Targets,
    pity_alloc: &[Category],
    n_max: u32,
) -> u32 {
    let n90 = find_n_for_quantile(PITY_ESTIMATE_QUANTILE, settings, targets, pity_alloc, n_max);
    n90.div_ceil(PITY_STEP)
}

/// "Luckier than X%" readout for someone who finished in `n` draws.
pub fn luck_percentile(
    n: u32,
    settings: &GlobalSettings,
    targets: &Targets,
    pity_alloc: &[Category],
) -> f64 {
    cumulative_success(n, settings, targets, pity_alloc) * 100.0
}
