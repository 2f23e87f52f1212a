//! Pr[all goals met within n draws] for a fixed pity plan.
//!
//! A and T are independent binomial tails. E.G.O is drawn without
//! replacement from a small labelled pool, so it gets an exact DP over
//! (wanted items held, featured items held) unless the pool is too large.

use super::rates::DrawParams;
use crate::core::constants::{DP_ABSORB_EPSILON, DP_PICKUP_LIMIT};
use crate::core::numeric::binom_tail;
use crate::core::types::{
    checkpoints_within, pity_counts, ratio, Category, GlobalSettings, PityCounts, Targets,
};

/// Probability that every target is satisfied after `n` draws.
///
/// Pity checkpoints reached within `n` draws grant their allocated category
/// outright; whatever remains must come from ordinary draws.
pub fn cumulative_success(
    n: u32,
    settings: &GlobalSettings,
    targets: &Targets,
    pity_alloc: &[Category],
) -> f64 {
    let granted = pity_counts(pity_alloc, checkpoints_within(n));
    let need = residual_need(targets, &granted);

    let params = DrawParams::new(settings, targets);
    let want = params.want(targets);

    let tail_a = binom_tail(need.a, n, want.a);
    let tail_t = binom_tail(need.t, n, want.t);
    if tail_a <= 0.0 || tail_t <= 0.0 {
        return 0.0;
    }
    let tail_e = ego_tail(n, need.e, targets.e.pickup, targets.e.desired, &params);

    (tail_a * tail_e * tail_t).clamp(0.0, 1.0)
}

/// Desired counts still open after pity grants, floored at zero.
pub fn residual_need(targets: &Targets, granted: &PityCounts) -> PityCounts {
    PityCounts::new(
        targets.a.desired.saturating_sub(granted.a),
        targets.e.desired.saturating_sub(granted.e),
        targets.t.desired.saturating_sub(granted.t),
    )
}

/// Pr[collect `need` distinct wanted E.G.O within `n` draws].
fn ego_tail(n: u32, need: u32, pickup: u32, desired: u32, params: &DrawParams) -> f64 {
    if need == 0 {
        return 1.0;
    }
    if pickup == 0 {
        return 0.0;
    }
    let p_featured = params.pick.e;
    if p_featured <= 0.0 {
        return 0.0;
    }

    if pickup > DP_PICKUP_LIMIT {
        let p_approx = p_featured * ratio(desired as f64, pickup as f64);
        return binom_tail(need, n, p_approx);
    }

    ego_dp(n, need as usize, pickup as usize, desired as usize, p_featured)
}

/// Exact DP over `(s, t)`: `s` wanted items held (absorbing at `need`),
/// `t` featured items held. Each draw is a new wanted item, a new unwanted
/// featured item, or anything else.
fn ego_dp(n: u32, need: usize, pickup: usize, desired: usize, p_featured: f64) -> f64 {
    let width = pickup + 1;
    let idx = |s: usize, t: usize| s * width + t;

    let mut dp = vec![0.0f64; (need + 1) * width];
    let mut next = vec![0.0f64; (need + 1) * width];
    dp[idx(0, 0)] = 1.0;

    let p_other = 1.0 - p_featured;

    for draw in 0..n as usize {
        next.iter_mut().for_each(|v| *v = 0.0);
        let t_max = pickup.min(draw);

        for t in 0..=t_max {
            for s in 0..=need.min(t) {
                let prob = dp[idx(s, t)];
                if prob <= 0.0 {
                    continue;
                }
                if s >= need {
                    next[idx(need, t)] += prob;
                    continue;
                }
                let pickup_rem = pickup - t;
                if pickup_rem == 0 {
                    next[idx(s, t)] += prob;
                    continue;
                }
                let desired_rem = desired.saturating_sub(s);
                let share_wanted = desired_rem as f64 / pickup_rem as f64;
                let share_unwanted = pickup_rem.saturating_sub(desired_rem) as f64 / pickup_rem as f64;

                next[idx((s + 1).min(need), t + 1)] += prob * p_featured * share_wanted;
                next[idx(s, t + 1)] += prob * p_featured * share_unwanted;
                next[idx(s, t)] += prob * p_other;
            }
        }
        std::mem::swap(&mut dp, &mut next);

        if absorbed(&dp, need, width) >= 1.0 - DP_ABSORB_EPSILON {
            break;
        }
    }

    absorbed(&dp, need, width).clamp(0.0, 1.0)
}

fn absorbed(dp: &[f64], need: usize, width: usize) -> f64 {
    dp[need * width..(need + 1) * width].iter().sum()
}
