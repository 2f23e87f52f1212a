//! Integration test: pity allocation
//!
//! Greedy and priority allocators, and the plan a front-end would show.

use pityplan::core::types::{pity_counts, Category, GlobalSettings, Target, Targets};
use pityplan::model::cumulative_success;
use pityplan::pity::{
    auto_max_draws, compute_greedy_pity_alloc, compute_priority_pity_alloc, plan_for,
    plan_within,
};

fn targets(a: (u32, u32), e: (u32, u32), t: (u32, u32)) -> Targets {
    Targets::new(
        Target::new(a.0, a.1),
        Target::new(e.0, e.1),
        Target::new(t.0, t.1),
    )
}

// =============================================================================
// Greedy
// =============================================================================

#[test]
fn test_greedy_length_matches_checkpoints() {
    let t = Targets::first_visit();
    let settings = GlobalSettings::default();
    for max_draws in [0, 199, 200, 999, 1000] {
        let alloc = compute_greedy_pity_alloc(max_draws, &settings, &t, &[]);
        assert_eq!(alloc.len() as u32, max_draws / 200, "max_draws={max_draws}");
    }
}

#[test]
fn test_greedy_never_over_allocates_within_auto_horizon() {
    let t = Targets::first_visit();
    let settings = GlobalSettings::default();
    let alloc = compute_greedy_pity_alloc(auto_max_draws(&t), &settings, &t, &[]);
    let counts = pity_counts(&alloc, u32::MAX);
    for c in Category::ALL {
        assert!(counts[c] <= t.desired()[c], "{c} over-allocated");
    }
}

#[test]
fn test_greedy_keeps_prefix() {
    let t = Targets::first_visit();
    let settings = GlobalSettings::default();
    let prefix = [Category::T, Category::A];
    let alloc = compute_greedy_pity_alloc(1000, &settings, &t, &prefix);
    assert_eq!(&alloc[..2], &prefix);
    assert_eq!(pity_counts(&alloc, u32::MAX), t.desired());
}

#[test]
fn test_greedy_beats_worst_priority_at_each_checkpoint() {
    // The greedy pick at checkpoint r is the locally best one, so F at the
    // first checkpoint is at least what any fixed first pick would give.
    let t = Targets::first_visit();
    let settings = GlobalSettings::default();
    let greedy = compute_greedy_pity_alloc(200, &settings, &t, &[]);
    let f_greedy = cumulative_success(200, &settings, &t, &greedy);
    for c in Category::ALL {
        let f_fixed = cumulative_success(200, &settings, &t, &[c]);
        assert!(f_greedy + 1e-15 >= f_fixed, "{c}: {f_fixed} > {f_greedy}");
    }
}

#[test]
fn test_greedy_skips_empty_ego_pool() {
    let t = targets((1, 1), (0, 0), (5, 2));
    let alloc = compute_greedy_pity_alloc(auto_max_draws(&t), &GlobalSettings::default(), &t, &[]);
    assert_eq!(alloc.len(), 3);
    assert!(!alloc.contains(&Category::E));
}

#[test]
fn test_greedy_with_nothing_wanted_is_filler() {
    let t = targets((1, 0), (2, 0), (5, 0));
    let alloc = compute_greedy_pity_alloc(600, &GlobalSettings::default(), &t, &[]);
    assert_eq!(alloc, vec![Category::E; 3]);
}

// =============================================================================
// Priority
// =============================================================================

#[test]
fn test_priority_respects_desired_counts() {
    let t = targets((1, 1), (2, 1), (5, 2));
    let alloc = compute_priority_pity_alloc(800, &t, &[Category::A, Category::T, Category::E]);
    assert_eq!(
        alloc,
        vec![Category::A, Category::T, Category::T, Category::E]
    );
}

#[test]
fn test_priority_invalid_order_uses_default() {
    let t = targets((1, 1), (2, 1), (5, 2));
    let alloc = compute_priority_pity_alloc(800, &t, &[Category::A, Category::A]);
    assert_eq!(
        alloc,
        vec![Category::E, Category::T, Category::T, Category::A]
    );
}

// =============================================================================
// Plan selection
// =============================================================================

#[test]
fn test_plan_for_uses_auto_horizon() {
    let t = targets((1, 0), (2, 1), (5, 2));
    let alloc = plan_for(&GlobalSettings::default(), &t);
    assert_eq!(alloc.len(), 3);
    assert_eq!(pity_counts(&alloc, u32::MAX), t.desired());
}

#[test]
fn test_manual_plan_respects_user_prefix() {
    let t = Targets::first_visit();
    let settings = GlobalSettings {
        auto_recommend: false,
        exchange_priority: vec![Category::T, Category::E, Category::A],
        exchange_plan: Some(vec![Category::A]),
        ..Default::default()
    };
    let alloc = plan_for(&settings, &t);
    assert_eq!(
        alloc,
        vec![Category::A, Category::T, Category::T, Category::E, Category::E]
    );
}

#[test]
fn test_plan_within_longer_horizon_pads_with_filler() {
    let t = targets((1, 1), (0, 0), (0, 0));
    let settings = GlobalSettings {
        auto_recommend: false,
        ..Default::default()
    };
    let alloc = plan_within(600, &settings, &t);
    assert_eq!(alloc, vec![Category::A, Category::E, Category::E]);
}
