//! Fixed-priority allocator: no probability evaluation, O(R).

use crate::core::constants::FILLER_CATEGORY;
use crate::core::types::{
    checkpoints_within, priority_or_default, Category, PityAlloc, PityCounts, Targets,
};

/// At each checkpoint pick the first category in `priority` that still needs
/// items; once every goal is covered fill with [`FILLER_CATEGORY`].
///
/// A `priority` that is not a permutation of all three categories falls back
/// to the default order.
pub fn compute_priority_pity_alloc(
    max_draws: u32,
    targets: &Targets,
    priority: &[Category],
) -> PityAlloc {
    let order = priority_or_default(priority);
    let mut alloc = PityAlloc::new();
    let mut remaining = targets.desired();
    extend_by_priority(&mut alloc, checkpoints_within(max_draws), &mut remaining, &order);
    alloc
}

/// Append priority picks until `alloc` covers `checkpoints` entries.
pub(crate) fn extend_by_priority(
    alloc: &mut PityAlloc,
    checkpoints: u32,
    remaining: &mut PityCounts,
    order: &[Category; 3],
) {
    while (alloc.len() as u32) < checkpoints {
        match order.iter().copied().find(|&c| remaining[c] > 0) {
            Some(c) => {
                alloc.push(c);
                remaining[c] -= 1;
            }
            None => alloc.push(FILLER_CATEGORY),
        }
    }
}
