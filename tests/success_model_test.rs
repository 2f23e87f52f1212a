//! Integration test: cumulative success model
//!
//! Exercises the analytic curve end to end: pity grants, the E.G.O
//! without-replacement DP and the binomial fallback.

use pityplan::core::numeric::binom_tail;
use pityplan::core::types::{Category, GlobalSettings, Target, Targets};
use pityplan::model::{cumulative_success, DrawParams};
use pityplan::pity::{auto_max_draws, compute_greedy_pity_alloc};

fn targets(a: (u32, u32), e: (u32, u32), t: (u32, u32)) -> Targets {
    Targets::new(
        Target::new(a.0, a.1),
        Target::new(e.0, e.1),
        Target::new(t.0, t.1),
    )
}

// =============================================================================
// Boundaries
// =============================================================================

#[test]
fn test_zero_draws() {
    let settings = GlobalSettings::default();
    assert_eq!(
        cumulative_success(0, &settings, &targets((1, 0), (2, 0), (5, 0)), &[]),
        1.0
    );
    assert_eq!(
        cumulative_success(0, &settings, &Targets::first_visit(), &[]),
        0.0
    );
}

#[test]
fn test_unreachable_goal_stays_zero() {
    // Wanting an E.G.O from an empty featured pool.
    let t = targets((0, 0), (0, 1), (0, 0));
    let settings = GlobalSettings::default();
    for n in [1, 200, 5000] {
        assert_eq!(cumulative_success(n, &settings, &t, &[]), 0.0);
    }
}

#[test]
fn test_full_pity_coverage_is_certain() {
    let t = targets((1, 1), (2, 2), (5, 2));
    let settings = GlobalSettings::default();
    let alloc = [Category::A, Category::E, Category::E, Category::T, Category::T];
    assert_eq!(cumulative_success(1000, &settings, &t, &alloc), 1.0);
    assert!(cumulative_success(999, &settings, &t, &alloc) < 1.0);
}

// =============================================================================
// E.G.O model
// =============================================================================

#[test]
fn test_large_ego_pool_falls_back_to_binomial() {
    let t = targets((0, 0), (13, 3), (0, 0));
    let settings = GlobalSettings::default();
    let p = DrawParams::new(&settings, &t).pick.e * (3.0 / 13.0);
    let f = cumulative_success(2000, &settings, &t, &[]);
    assert!((f - binom_tail(3, 2000, p)).abs() < 1e-15);
}

#[test]
fn test_dp_pool_at_limit_is_a_probability() {
    let t = targets((0, 0), (12, 6), (0, 0));
    let settings = GlobalSettings::default();
    let mut prev = 0.0;
    for n in (0..=3000).step_by(250) {
        let f = cumulative_success(n, &settings, &t, &[]);
        assert!((0.0..=1.0).contains(&f));
        assert!(f + 1e-12 >= prev);
        prev = f;
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_announcer_excluded_scenario_clears_ninety_five_percent() {
    // E 1 of 2, T 2 of 5, no announcer wanted: the automatic horizon is 600
    // and three pity checkpoints cover every wanted item.
    let t = targets((1, 0), (2, 1), (5, 2));
    let settings = GlobalSettings::default();
    let horizon = auto_max_draws(&t);
    assert_eq!(horizon, 600);

    let alloc = compute_greedy_pity_alloc(horizon, &settings, &t, &[]);
    assert_eq!(alloc.len(), 3);
    assert!(cumulative_success(horizon, &settings, &t, &alloc) > 0.95);
}

#[test]
fn test_first_visit_curve_is_monotone() {
    let t = Targets::first_visit();
    let settings = GlobalSettings::default();
    let horizon = auto_max_draws(&t);
    let alloc = compute_greedy_pity_alloc(horizon, &settings, &t, &[]);

    let mut prev = 0.0;
    for n in 0..=horizon {
        let f = cumulative_success(n, &settings, &t, &alloc);
        assert!(f + 1e-12 >= prev, "n={n}: {f} < {prev}");
        prev = f;
    }
    assert_eq!(prev, 1.0);
}
