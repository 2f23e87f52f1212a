//! Pity allocation: which goal each guaranteed draw is spent on.

mod greedy;
mod plan;
mod priority;

pub use greedy::compute_greedy_pity_alloc;
pub use plan::{plan_for, plan_within};
pub use priority::compute_priority_pity_alloc;

use crate::core::constants::PITY_STEP;
use crate::core::types::Targets;

/// Horizon heuristic: one pity checkpoint per desired item.
pub fn auto_max_draws(targets: &Targets) -> u32 {
    targets.desired_total() * PITY_STEP
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Target;

    #[test]
    fn test_auto_max_draws() {
        let targets = Targets::new(Target::new(1, 0), Target::new(2, 1), Target::new(5, 2));
        assert_eq!(auto_max_draws(&targets), 600);
        assert_eq!(auto_max_draws(&Targets::default()), 0);
    }
}
