//! Greedy allocator: spend each checkpoint where it buys the most probability.

use crate::core::constants::{FILLER_CATEGORY, PITY_STEP};
use crate::core::types::{checkpoints_within, Category, GlobalSettings, PityAlloc, Targets};
use crate::model::cumulative_success;
use tracing::debug;

/// Extend `prefix` checkpoint by checkpoint up to `max_draws`.
///
/// For checkpoint `r` the gain of category `c` is
/// `F(r*STEP, alloc + c) - F(r*STEP - 1, alloc)`; the best gain wins and ties
/// go to the earlier category in A, E, T order. Categories with nothing left
/// to collect are never candidates. The prefix is taken as given.
pub fn compute_greedy_pity_alloc(
    max_draws: u32,
    settings: &GlobalSettings,
    targets: &Targets,
    prefix: &[Category],
) -> PityAlloc {
    let checkpoints = checkpoints_within(max_draws);
    let mut alloc: PityAlloc = prefix.to_vec();

    let mut remaining = targets.desired();
    for &c in prefix {
        remaining[c] = remaining[c].saturating_sub(1);
    }

    for r in (alloc.len() as u32 + 1)..=checkpoints {
        let n_before = r * PITY_STEP - 1;
        let n_after = r * PITY_STEP;
        let f_before = cumulative_success(n_before, settings, targets, &alloc);

        let mut best: Option<(Category, f64)> = None;
        for c in Category::ALL.into_iter().filter(|&c| remaining[c] > 0) {
            alloc.push(c);
            let gain = cumulative_success(n_after, settings, targets, &alloc) - f_before;
            alloc.pop();
            if best.map_or(true, |(_, best_gain)| gain > best_gain) {
                best = Some((c, gain));
            }
        }

        match best {
            Some((c, gain)) => {
                debug!(checkpoint = r, category = %c, gain, "greedy pity pick");
                alloc.push(c);
                remaining[c] -= 1;
            }
            None => alloc.push(FILLER_CATEGORY),
        }
    }

    alloc
}
