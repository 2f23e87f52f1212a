//! Sampling cross-check of the analytic success curve.
//!
//! Uses the same draw parameters and pity counting as the analytic model but
//! never feeds back into it.

use super::rng::Lcg;
use crate::analysis::CurvePoint;
use crate::core::constants::PITY_STEP;
use crate::core::types::{
    checkpoints_within, pity_counts, Category, GlobalSettings, PityCounts, Targets,
};
use crate::model::success::residual_need;
use crate::model::DrawParams;

/// Empirical Pr[all goals met within `n` draws] over `samples` runs.
///
/// Pity grants within `n` are applied up front. Every E.G.O featured drop
/// shrinks the remaining pool, and a wanted one also shrinks the remaining
/// wanted count, mirroring the without-replacement DP.
pub fn monte_carlo_success(
    n: u32,
    settings: &GlobalSettings,
    targets: &Targets,
    pity_alloc: &[Category],
    samples: u32,
    seed: u32,
) -> f64 {
    if n == 0 {
        return if targets.nothing_desired() { 1.0 } else { 0.0 };
    }

    let granted = pity_counts(pity_alloc, checkpoints_within(n));
    let start_need = residual_need(targets, &granted);
    let params = DrawParams::new(settings, targets);
    let mut rng = Lcg::new(seed);

    let successes = (0..samples)
        .filter(|_| simulate_sample(n, &start_need, targets, &params, &mut rng))
        .count();

    successes as f64 / samples.max(1) as f64
}

fn simulate_sample(
    n: u32,
    start_need: &PityCounts,
    targets: &Targets,
    params: &DrawParams,
    rng: &mut Lcg,
) -> bool {
    let mut need = *start_need;
    if need.is_zero() {
        return true;
    }
    let mut rem_pickup_e = targets.e.pickup;
    let mut rem_desired_e = targets.e.desired;

    let edge_a = params.pick.a;
    let edge_e = edge_a + params.pick.e;
    let edge_t = edge_e + params.pick.t;

    for _ in 0..n {
        let u = rng.next_f64();
        if u < edge_a {
            if need.a > 0 && rng.next_f64() < params.ratio.a {
                need.a -= 1;
            }
        } else if u < edge_e {
            if rem_pickup_e > 0 {
                let p_want = rem_desired_e as f64 / rem_pickup_e as f64;
                if need.e > 0 && rng.next_f64() < p_want {
                    need.e -= 1;
                    rem_desired_e = rem_desired_e.saturating_sub(1);
                }
                rem_pickup_e -= 1;
            }
        } else if u < edge_t && need.t > 0 && rng.next_f64() < params.ratio.t {
            need.t -= 1;
        }

        if need.is_zero() {
            return true;
        }
    }
    false
}

/// Draw counts worth sampling for a chart: both ends plus both sides of
/// every pity checkpoint.
pub fn monte_carlo_points(n_max: u32) -> Vec<u32> {
    let mut ns = vec![0, n_max];
    for r in 1..=checkpoints_within(n_max) {
        ns.push(r * PITY_STEP - 1);
        ns.push(r * PITY_STEP);
    }
    ns.sort_unstable();
    ns.dedup();
    ns
}

/// Monte Carlo estimates at `points` (sorted ascending), smoothed with a
/// running maximum so the plotted curve never decreases.
pub fn monte_carlo_curve(
    settings: &GlobalSettings,
    targets: &Targets,
    pity_alloc: &[Category],
    points: &[u32],
    samples: u32,
    seed: u32,
) -> Vec<CurvePoint> {
    let mut best = 0.0f64;
    points
        .iter()
        .map(|&n| {
            let estimate =
                monte_carlo_success(n, settings, targets, pity_alloc, samples, seed);
            best = best.max(estimate);
            CurvePoint { n, success: best }
        })
        .collect()
}
