//! One simulated pull session, advanced a single draw at a time.
//!
//! The host decides when to call [`SingleRun::step`] (an animation frame, a
//! timer, a plain loop); the run itself holds no scheduling primitive.

use crate::core::constants::{LUCK_CAP, PITY_STEP, REPLAY_POINT_BUDGET};
use crate::core::types::{Category, GlobalSettings, PityAlloc, PityCounts, Targets};
use crate::model::{cumulative_success, DrawParams};
use rand::Rng;
use serde::Serialize;

/// How an item was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawSource {
    Draw,
    Pity,
}

/// Progress readout after draw `n`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimPoint {
    pub n: u32,
    pub success_probability: f64,
    /// Readout minus the planned curve `F(n)`: positive when running ahead.
    pub deviation: f64,
}

/// A wanted item obtained on draw `n`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimEvent {
    pub n: u32,
    /// Progress readout after this draw, for placing the marker.
    pub luck: f64,
    pub category: Category,
    pub source: DrawSource,
}

/// What one call to [`SingleRun::step`] produced.
#[derive(Debug, Clone, Default)]
pub struct StepOutcome {
    pub point: Option<SimPoint>,
    pub events: Vec<SimEvent>,
    pub done: bool,
}

#[derive(Debug, Clone)]
pub struct SingleRun {
    settings: GlobalSettings,
    targets: Targets,
    pity_alloc: PityAlloc,
    params: DrawParams,
    horizon: u32,
    emit_every: u32,
    need: PityCounts,
    rem_pickup_e: u32,
    rem_desired_e: u32,
    achieved: bool,
    drawn: u32,
    forward_luck: bool,
}

impl SingleRun {
    /// A run over `min(total, max_n)` draws.
    pub fn new(
        total: u32,
        max_n: u32,
        settings: &GlobalSettings,
        targets: &Targets,
        pity_alloc: &[Category],
    ) -> Self {
        let horizon = total.min(max_n);
        let need = targets.desired();
        Self {
            settings: settings.clone(),
            targets: *targets,
            pity_alloc: pity_alloc.to_vec(),
            params: DrawParams::new(settings, targets),
            horizon,
            emit_every: (horizon / REPLAY_POINT_BUDGET).max(1),
            need,
            rem_pickup_e: targets.e.pickup,
            rem_desired_e: targets.e.desired,
            achieved: need.is_zero(),
            drawn: 0,
            forward_luck: true,
        }
    }

    /// Skip the per-draw analytic readout; points then show 0 until completion.
    pub fn without_forward_luck(mut self) -> Self {
        self.forward_luck = false;
        self
    }

    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    pub fn drawn(&self) -> u32 {
        self.drawn
    }

    pub fn need(&self) -> PityCounts {
        self.need
    }

    pub fn is_complete(&self) -> bool {
        self.achieved
    }

    /// Advance by one draw.
    ///
    /// Finishes when every goal is met or the draw budget runs out, whichever
    /// comes first. Stepping a finished run is a no-op that reports `done`.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepOutcome {
        if self.drawn >= self.horizon || (self.achieved && self.drawn > 0) {
            return StepOutcome {
                done: true,
                ..Default::default()
            };
        }

        let n = self.drawn + 1;
        let mut obtained: Vec<(Category, DrawSource)> = Vec::new();

        if !self.achieved {
            if let Some(c) = self.roll_draw(rng) {
                obtained.push((c, DrawSource::Draw));
            }
        }
        if n % PITY_STEP == 0 {
            if let Some(c) = self.apply_pity(n / PITY_STEP - 1) {
                obtained.push((c, DrawSource::Pity));
            }
        }

        self.achieved = self.need.is_zero();
        self.drawn = n;

        let luck = if self.achieved {
            1.0
        } else {
            self.forward_luck().min(LUCK_CAP)
        };

        let events = obtained
            .into_iter()
            .map(|(category, source)| SimEvent {
                n,
                luck,
                category,
                source,
            })
            .collect();

        let emit = n % self.emit_every == 0
            || n % PITY_STEP == 0
            || n == self.horizon
            || self.achieved;

        StepOutcome {
            point: emit.then(|| SimPoint {
                n,
                success_probability: luck,
                deviation: self.deviation(n, luck),
            }),
            events,
            done: self.achieved || n >= self.horizon,
        }
    }

    fn roll_draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Category> {
        let pick = self.params.pick;
        let ratio = self.params.ratio;
        let u: f64 = rng.gen();

        if u < pick.a {
            if self.need.a > 0 && rng.gen::<f64>() < ratio.a {
                self.need.a -= 1;
                return Some(Category::A);
            }
        } else if u < pick.a + pick.e {
            if self.rem_pickup_e > 0 {
                let p_want = self.rem_desired_e as f64 / self.rem_pickup_e as f64;
                let mut hit = false;
                if self.need.e > 0 && rng.gen::<f64>() < p_want {
                    self.need.e -= 1;
                    self.rem_desired_e = self.rem_desired_e.saturating_sub(1);
                    hit = true;
                }
                self.rem_pickup_e -= 1;
                if hit {
                    return Some(Category::E);
                }
            }
        } else if u < pick.a + pick.e + pick.t
            && self.need.t > 0
            && rng.gen::<f64>() < ratio.t
        {
            self.need.t -= 1;
            return Some(Category::T);
        }
        None
    }

    /// Spend checkpoint `index` on its planned category, or on the first
    /// category in priority order that still needs items.
    fn apply_pity(&mut self, index: u32) -> Option<Category> {
        let planned = self.pity_alloc.get(index as usize).copied();
        let order = self.settings.priority_order();
        let chosen = planned
            .into_iter()
            .chain(order)
            .find(|&c| self.need[c] > 0)?;

        self.need[chosen] -= 1;
        if chosen == Category::E {
            self.rem_desired_e = self.rem_desired_e.saturating_sub(1);
        }
        Some(chosen)
    }

    fn deviation(&self, n: u32, luck: f64) -> f64 {
        if !self.forward_luck {
            return 0.0;
        }
        luck - cumulative_success(n, &self.settings, &self.targets, &self.pity_alloc)
    }

    /// Chance of finishing with the draws left, without future pity.
    fn forward_luck(&self) -> f64 {
        if !self.forward_luck {
            return 0.0;
        }
        let draws_left = self.horizon.saturating_sub(self.drawn);
        if draws_left == 0 {
            return 0.0;
        }
        let remaining = self.targets.with_desired(&self.need);
        cumulative_success(draws_left, &self.settings, &remaining, &[])
    }
}
