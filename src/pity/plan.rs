//! The plan a front-end shows: user prefix, then greedy or priority fill.

use super::auto_max_draws;
use super::greedy::compute_greedy_pity_alloc;
use super::priority::extend_by_priority;
use crate::core::types::{checkpoints_within, Category, GlobalSettings, PityAlloc, Targets};

/// Pity plan over the automatic horizon for the current targets and settings.
pub fn plan_for(settings: &GlobalSettings, targets: &Targets) -> PityAlloc {
    plan_within(auto_max_draws(targets), settings, targets)
}

/// Pity plan over an explicit horizon.
///
/// The user's `exchange_plan` is truncated to the checkpoints in range and
/// entries for categories that are already fully covered are dropped. With
/// `auto_recommend` the greedy allocator fills the rest, otherwise the
/// exchange priority does.
pub fn plan_within(max_draws: u32, settings: &GlobalSettings, targets: &Targets) -> PityAlloc {
    let checkpoints = checkpoints_within(max_draws);
    let prefix = admissible_prefix(
        settings.exchange_plan.as_deref().unwrap_or_default(),
        targets,
        checkpoints,
    );

    if settings.auto_recommend {
        return compute_greedy_pity_alloc(max_draws, settings, targets, &prefix);
    }

    let mut remaining = targets.desired();
    for &c in &prefix {
        remaining[c] -= 1;
    }
    let mut alloc = prefix;
    extend_by_priority(&mut alloc, checkpoints, &mut remaining, &settings.priority_order());
    alloc
}

fn admissible_prefix(plan: &[Category], targets: &Targets, checkpoints: u32) -> PityAlloc {
    let mut remaining = targets.desired();
    let mut prefix = PityAlloc::new();
    for &c in plan {
        if prefix.len() as u32 >= checkpoints {
            break;
        }
        if remaining[c] > 0 {
            remaining[c] -= 1;
            prefix.push(c);
        }
    }
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{pity_counts, Target};

    fn sample_targets() -> Targets {
        Targets::new(Target::new(1, 1), Target::new(2, 2), Target::new(5, 2))
    }

    #[test]
    fn test_manual_plan_with_priority_fill() {
        let settings = GlobalSettings {
            auto_recommend: false,
            exchange_priority: vec![Category::A, Category::T, Category::E],
            exchange_plan: Some(vec![Category::E]),
            ..Default::default()
        };
        let alloc = plan_for(&settings, &sample_targets());
        assert_eq!(
            alloc,
            vec![Category::E, Category::A, Category::T, Category::T, Category::E]
        );
    }

    #[test]
    fn test_over_budget_prefix_entries_are_dropped() {
        let settings = GlobalSettings {
            auto_recommend: false,
            exchange_plan: Some(vec![Category::A, Category::A, Category::T]),
            ..Default::default()
        };
        let alloc = plan_for(&settings, &sample_targets());
        assert_eq!(&alloc[..2], &[Category::A, Category::T]);
        assert_eq!(pity_counts(&alloc, u32::MAX), sample_targets().desired());
    }

    #[test]
    fn test_prefix_truncated_to_horizon() {
        let targets = Targets::new(Target::new(1, 1), Target::new(0, 0), Target::new(0, 0));
        let settings = GlobalSettings {
            exchange_plan: Some(vec![Category::A, Category::T, Category::E]),
            ..Default::default()
        };
        assert_eq!(plan_for(&settings, &targets), vec![Category::A]);
    }

    #[test]
    fn test_greedy_plan_covers_every_desired_item() {
        let alloc = plan_for(&GlobalSettings::default(), &sample_targets());
        assert_eq!(pity_counts(&alloc, u32::MAX), sample_targets().desired());
    }
}
