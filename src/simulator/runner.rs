//! Scenario runner: plan, analytic curve, optional sampling and replays.
//!
//! Everything here composes the pure engine functions; randomness only
//! enters through the Monte Carlo seed and the per-run replay RNGs.

use super::config::SimConfig;
use super::monte_carlo::{monte_carlo_points, monte_carlo_success};
use super::replay::{Replay, RunEnd};
use super::report::{McPoint, PlanReport, ReplayOutcome, ReplaySummary};
use super::single_run::{DrawSource, SingleRun};
use crate::analysis::{before_after_table, estimate_pity_needed, QuantileRow};
use crate::model::cumulative_success;
use crate::pity::{auto_max_draws, plan_within};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Run the full scenario and return a report.
pub fn run_plan(config: &SimConfig) -> PlanReport {
    let scenario = config.scenario.sanitized();
    let (settings, targets) = (&scenario.settings, &scenario.targets);
    let draws = scenario.resources.to_draws();
    let horizon = config.max_draws.unwrap_or_else(|| auto_max_draws(targets));

    info!(total = draws.total, horizon, "running plan report");

    let plan = plan_within(horizon, settings, targets);
    let success_at_total = cumulative_success(draws.total, settings, targets, &plan);
    let quantiles = config
        .quantiles
        .iter()
        .map(|&q| QuantileRow::compute(q, settings, targets, &plan, horizon))
        .collect();
    let pity_needed = estimate_pity_needed(settings, targets, &plan, horizon);
    let table = before_after_table(settings, targets, &plan, horizon);

    let monte_carlo = (config.mc_samples > 0).then(|| {
        monte_carlo_points(horizon)
            .into_iter()
            .map(|n| McPoint {
                n,
                analytic: cumulative_success(n, settings, targets, &plan),
                sampled: monte_carlo_success(
                    n,
                    settings,
                    targets,
                    &plan,
                    config.mc_samples,
                    config.mc_seed,
                ),
            })
            .collect()
    });

    let replays = (config.replay_runs > 0).then(|| {
        let outcomes = (0..config.replay_runs)
            .map(|run_idx| {
                // Create RNG for this run
                let mut rng = match config.seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
                    None => ChaCha8Rng::from_entropy(),
                };
                let run = SingleRun::new(draws.total, horizon, settings, targets, &plan)
                    .without_forward_luck();
                let outcome = replay_once(run, &mut rng);

                if config.verbosity >= 2 {
                    debug!(
                        run = run_idx + 1,
                        of = config.replay_runs,
                        completed = outcome.completed,
                        draws = outcome.draws,
                        "replay finished"
                    );
                }
                outcome
            })
            .collect();
        ReplaySummary::from_runs(outcomes)
    });

    let report = PlanReport {
        draws,
        horizon,
        plan,
        success_at_total,
        quantiles,
        pity_needed,
        table,
        monte_carlo,
        replays,
    };

    if config.verbosity >= 1 {
        info!(
            success = report.success_at_total,
            pity_needed = report.pity_needed,
            "plan report ready"
        );
    }
    report
}

/// Drive one run through a [`Replay`] until it stops.
fn replay_once(run: SingleRun, rng: &mut ChaCha8Rng) -> ReplayOutcome {
    let mut replay = Replay::new();
    replay.start(run);
    replay.run_to_end(rng);

    let events = replay.events();
    let pity_items = events
        .iter()
        .filter(|e| e.source == DrawSource::Pity)
        .count() as u32;
    let end = replay.ended().unwrap_or(RunEnd {
        complete: false,
        drawn: 0,
    });

    ReplayOutcome {
        completed: end.complete,
        draws: end.drawn,
        pity_items,
        drawn_items: events.len() as u32 - pity_items,
    }
}
