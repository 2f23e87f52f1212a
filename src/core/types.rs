//! Targets, settings and resources.
//!
//! Every engine call is a pure function of these values. The category set is
//! closed, so per-category data lives in a fixed three-slot [`PerCategory`]
//! indexed by [`Category`] rather than a keyed map.

use super::constants::{DEFAULT_PRIORITY, LUNACY_PER_1, LUNACY_PER_10, PITY_STEP};
use crate::error::PlanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Goal category a target (and a pity checkpoint) can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Announcer
    A,
    /// E.G.O
    E,
    /// Three-star identity
    T,
}

impl Category {
    /// Iteration order used for tie-breaking everywhere.
    pub const ALL: [Category; 3] = [Category::A, Category::E, Category::T];

    pub fn label(self) -> &'static str {
        match self {
            Category::A => "A",
            Category::E => "E",
            Category::T => "T",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::A => "Announcer",
            Category::E => "E.G.O",
            Category::T => "Three-star",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Category::A),
            "E" | "e" => Ok(Category::E),
            "T" | "t" => Ok(Category::T),
            other => Err(PlanError::UnknownCategory(other.to_string())),
        }
    }
}

/// One value per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerCategory<T> {
    #[serde(rename = "A", default)]
    pub a: T,
    #[serde(rename = "E", default)]
    pub e: T,
    #[serde(rename = "T", default)]
    pub t: T,
}

impl<T> PerCategory<T> {
    pub fn new(a: T, e: T, t: T) -> Self {
        Self { a, e, t }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().map(move |c| (c, &self[c]))
    }
}

impl<T> Index<Category> for PerCategory<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        match category {
            Category::A => &self.a,
            Category::E => &self.e,
            Category::T => &self.t,
        }
    }
}

impl<T> IndexMut<Category> for PerCategory<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::A => &mut self.a,
            Category::E => &mut self.e,
            Category::T => &mut self.t,
        }
    }
}

/// Per-category item counts (pity grants, outstanding needs).
pub type PityCounts = PerCategory<u32>;

impl PerCategory<u32> {
    pub fn total(&self) -> u32 {
        self.a + self.e + self.t
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }
}

/// Featured pool size and how many of its items the user wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Target {
    pub pickup: u32,
    pub desired: u32,
}

impl Target {
    pub fn new(pickup: u32, desired: u32) -> Self {
        Self { pickup, desired }
    }

    /// Clamp `desired` into `[0, pickup]`.
    pub fn clamped(self) -> Self {
        Self {
            pickup: self.pickup,
            desired: self.desired.min(self.pickup),
        }
    }

    /// Wanted share of the featured pool, 0 when the pool is empty.
    pub fn ratio(&self) -> f64 {
        ratio(self.desired as f64, self.pickup as f64)
    }
}

/// `a / b` clamped to `[0, 1]`, or 0 when `b <= 0`.
pub fn ratio(a: f64, b: f64) -> f64 {
    if b <= 0.0 {
        return 0.0;
    }
    (a / b).clamp(0.0, 1.0)
}

pub type Targets = PerCategory<Target>;

impl PerCategory<Target> {
    /// Defaults shown to a first-time user: A 1/1, E 2/2, T 2/5.
    pub fn first_visit() -> Self {
        Self::new(Target::new(1, 1), Target::new(2, 2), Target::new(5, 2))
    }

    pub fn desired_total(&self) -> u32 {
        self.a.desired + self.e.desired + self.t.desired
    }

    pub fn desired(&self) -> PityCounts {
        PityCounts::new(self.a.desired, self.e.desired, self.t.desired)
    }

    pub fn nothing_desired(&self) -> bool {
        self.desired_total() == 0
    }

    /// Same pools with `desired` replaced by `need`.
    pub fn with_desired(&self, need: &PityCounts) -> Self {
        Self::new(
            Target::new(self.a.pickup, need.a),
            Target::new(self.e.pickup, need.e),
            Target::new(self.t.pickup, need.t),
        )
    }

    /// Enforce `desired <= pickup` for every category.
    pub fn sanitized(&self) -> Self {
        Self::new(self.a.clamped(), self.e.clamped(), self.t.clamped())
    }
}

/// Options that shape the probability model and the pity plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalSettings {
    /// Fill the plan greedily by marginal gain instead of by priority.
    pub auto_recommend: bool,
    /// Every non-featured E.G.O is already owned.
    pub own_all_existing_pool_ego: bool,
    /// Fallback order when greedy allocation is off.
    pub exchange_priority: Vec<Category>,
    /// User-arranged plan prefix.
    pub exchange_plan: Option<Vec<Category>>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            auto_recommend: true,
            own_all_existing_pool_ego: false,
            exchange_priority: DEFAULT_PRIORITY.to_vec(),
            exchange_plan: None,
        }
    }
}

impl GlobalSettings {
    /// The exchange priority if it is a full permutation, the default otherwise.
    pub fn priority_order(&self) -> [Category; 3] {
        priority_or_default(&self.exchange_priority)
    }

    /// De-duplicate the priority and complete it with missing categories.
    pub fn sanitized(&self) -> Self {
        let mut priority: Vec<Category> = Vec::with_capacity(3);
        for &c in self.exchange_priority.iter().chain(Category::ALL.iter()) {
            if !priority.contains(&c) {
                priority.push(c);
            }
        }
        Self {
            exchange_priority: priority,
            ..self.clone()
        }
    }
}

/// `priority` if it is a permutation of all three categories, else the default order.
pub fn priority_or_default(priority: &[Category]) -> [Category; 3] {
    match *priority {
        [x, y, z] if x != y && y != z && x != z => [x, y, z],
        _ => DEFAULT_PRIORITY,
    }
}

/// Draw currencies held by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resources {
    pub lunacy: u32,
    pub ticket1: u32,
    pub ticket10: u32,
}

/// Resources converted into draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawCounts {
    pub n10: u32,
    pub n1: u32,
    pub total: u32,
}

impl Resources {
    /// Defaults shown to a first-time user.
    pub fn first_visit() -> Self {
        Self {
            lunacy: 20_000,
            ticket1: 26,
            ticket10: 4,
        }
    }

    /// Ten-pulls are bought first, leftover lunacy goes to single pulls.
    pub fn to_draws(&self) -> DrawCounts {
        let ten_from_lunacy = self.lunacy / LUNACY_PER_10;
        let remainder = self.lunacy % LUNACY_PER_10;
        let one_from_lunacy = remainder / LUNACY_PER_1;
        let n10 = self.ticket10 + ten_from_lunacy;
        let n1 = self.ticket1 + one_from_lunacy;
        DrawCounts {
            n10,
            n1,
            total: n10 * 10 + n1,
        }
    }
}

/// `alloc[i]` is the category the (i+1)-th pity draw goes to.
pub type PityAlloc = Vec<Category>;

/// Pity checkpoints reached after `n` draws.
pub fn checkpoints_within(n: u32) -> u32 {
    n / PITY_STEP
}

/// Pity grants per category among the first `checkpoints` entries of `alloc`.
pub fn pity_counts(alloc: &[Category], checkpoints: u32) -> PityCounts {
    let mut counts = PityCounts::default();
    for &c in alloc.iter().take(checkpoints as usize) {
        counts[c] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_label() {
        for c in Category::ALL {
            assert_eq!(c.label().parse::<Category>().ok(), Some(c));
        }
        assert!("X".parse::<Category>().is_err());
    }

    #[test]
    fn test_ratio_guards_empty_pool() {
        assert_eq!(Target::new(0, 3).ratio(), 0.0);
        assert_eq!(Target::new(4, 1).ratio(), 0.25);
        assert_eq!(Target::new(2, 5).ratio(), 1.0);
    }

    #[test]
    fn test_sanitized_clamps_desired() {
        let targets = Targets::new(Target::new(1, 3), Target::new(0, 2), Target::new(5, 2));
        let clean = targets.sanitized();
        assert_eq!(clean.a.desired, 1);
        assert_eq!(clean.e.desired, 0);
        assert_eq!(clean.t.desired, 2);
    }

    #[test]
    fn test_resources_to_draws() {
        let draws = Resources::first_visit().to_draws();
        // 20000 lunacy = 15 ten-pulls (19500) + 3 singles (390), 110 left over
        assert_eq!(draws.n10, 4 + 15);
        assert_eq!(draws.n1, 26 + 3);
        assert_eq!(draws.total, 19 * 10 + 29);
    }

    #[test]
    fn test_priority_order_falls_back_on_invalid() {
        let mut settings = GlobalSettings::default();
        assert_eq!(settings.priority_order(), DEFAULT_PRIORITY);

        settings.exchange_priority = vec![Category::T, Category::A, Category::E];
        assert_eq!(
            settings.priority_order(),
            [Category::T, Category::A, Category::E]
        );

        settings.exchange_priority = vec![Category::T, Category::T, Category::E];
        assert_eq!(settings.priority_order(), DEFAULT_PRIORITY);
    }

    #[test]
    fn test_settings_sanitized_completes_priority() {
        let settings = GlobalSettings {
            exchange_priority: vec![Category::T, Category::T],
            ..Default::default()
        };
        assert_eq!(
            settings.sanitized().exchange_priority,
            vec![Category::T, Category::A, Category::E]
        );
    }

    #[test]
    fn test_pity_counts_respects_checkpoints() {
        let alloc = vec![Category::A, Category::E, Category::E, Category::T];
        let counts = pity_counts(&alloc, 3);
        assert_eq!(counts, PityCounts::new(1, 2, 0));
        assert_eq!(pity_counts(&alloc, 10).total(), 4);
        assert_eq!(checkpoints_within(399), 1);
        assert_eq!(checkpoints_within(400), 2);
    }

    #[test]
    fn test_targets_serde_uses_category_keys() {
        let json = r#"{"A":{"pickup":1,"desired":1},"E":{"pickup":2},"T":{"pickup":5,"desired":2}}"#;
        let targets: Targets = serde_json::from_str(json).unwrap();
        assert_eq!(targets.e, Target::new(2, 0));
        assert_eq!(targets.desired_total(), 3);
    }
}
