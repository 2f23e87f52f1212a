//! Disclosed drop rates and the per-draw "useful" probabilities derived from them.

use crate::core::constants::{PICKUP_SHARE, PICKUP_SHARE_OWNED_POOL};
use crate::core::types::{GlobalSettings, PerCategory, Targets};
use serde::Serialize;

/// Per-draw probabilities of each rarity tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaseRates {
    /// Announcer tier
    pub p_a: f64,
    /// E.G.O tier
    pub p_e: f64,
    pub p3: f64,
    pub p2: f64,
    pub p1: f64,
}

impl BaseRates {
    pub fn sum(&self) -> f64 {
        self.p_a + self.p_e + self.p3 + self.p2 + self.p1
    }
}

fn pct(x: f64) -> f64 {
    x / 100.0
}

/// Rate table keyed on whether an Announcer banner is running and whether
/// E.G.O can still drop. Without E.G.O the leftover mass goes to the lowest
/// tier so the table always sums to 1.
pub fn base_category_probs(has_announcer: bool, ego_available: bool) -> BaseRates {
    let p_a = if has_announcer { pct(1.3) } else { 0.0 };
    let p_e = if ego_available { pct(1.3) } else { 0.0 };

    if ego_available {
        BaseRates {
            p_a,
            p_e,
            p3: pct(2.9),
            p2: pct(12.8),
            p1: if has_announcer { pct(81.7) } else { pct(83.0) },
        }
    } else {
        let p3 = pct(3.0);
        let p2 = pct(13.0);
        BaseRates {
            p_a,
            p_e,
            p3,
            p2,
            p1: if has_announcer {
                1.0 - (p_a + p3 + p2)
            } else {
                pct(84.0)
            },
        }
    }
}

/// Every tenth pull upgrades the lowest tier to the second tier.
///
/// Standalone rate transform; the success model and simulators do not apply it.
pub fn apply_tenth_draw_boost(rates: BaseRates) -> BaseRates {
    BaseRates {
        p2: rates.p2 + rates.p1,
        p1: 0.0,
        ..rates
    }
}

/// Per-draw chance of pulling a wanted featured item in each category.
///
/// A and T drops land in the featured pool half of the time; E.G.O uses
/// `ego_share`, which is 1.0 when the rest of the pool is already owned.
pub fn want_prob_per_category(
    has_announcer: bool,
    ego_available: bool,
    targets: &Targets,
    ego_share: f64,
) -> PerCategory<f64> {
    let base = base_category_probs(has_announcer, ego_available);
    let clamp = |x: f64| x.clamp(0.0, 1.0);

    PerCategory::new(
        clamp(base.p_a * PICKUP_SHARE * targets.a.ratio()),
        clamp(base.p_e * ego_share * targets.e.ratio()),
        clamp(base.p3 * PICKUP_SHARE * targets.t.ratio()),
    )
}

/// Draw parameters shared by the analytic model and both simulators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawParams {
    pub has_announcer: bool,
    pub ego_available: bool,
    pub ego_share: f64,
    pub base: BaseRates,
    /// Chance a draw lands in each featured pool, before the wanted ratio.
    pub pick: PerCategory<f64>,
    /// Wanted share of each featured pool.
    pub ratio: PerCategory<f64>,
}

impl DrawParams {
    pub fn new(settings: &GlobalSettings, targets: &Targets) -> Self {
        let has_announcer = targets.a.pickup > 0;
        let ego_available = targets.e.pickup > 0 || !settings.own_all_existing_pool_ego;
        let ego_share = if targets.e.pickup > 0 && settings.own_all_existing_pool_ego {
            PICKUP_SHARE_OWNED_POOL
        } else {
            PICKUP_SHARE
        };
        let base = base_category_probs(has_announcer, ego_available);

        Self {
            has_announcer,
            ego_available,
            ego_share,
            base,
            pick: PerCategory::new(
                base.p_a * PICKUP_SHARE,
                base.p_e * ego_share,
                base.p3 * PICKUP_SHARE,
            ),
            ratio: PerCategory::new(targets.a.ratio(), targets.e.ratio(), targets.t.ratio()),
        }
    }

    /// Useful per-draw probabilities for `targets` under these pool flags.
    pub fn want(&self, targets: &Targets) -> PerCategory<f64> {
        want_prob_per_category(self.has_announcer, self.ego_available, targets, self.ego_share)
    }
}
