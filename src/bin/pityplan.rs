//! Pity plan CLI.
//!
//! Usage:
//!   cargo run --bin pityplan -- <COMMAND> [OPTIONS]
//!
//! Examples:
//!   cargo run --bin pityplan -- report                         # First-visit defaults
//!   cargo run --bin pityplan -- report -s banner.json --mc 2000
//!   cargo run --bin pityplan -- quantile -q 0.5 -q 0.9
//!   cargo run --bin pityplan -- replay --seed 42

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pityplan::analysis::{
    before_after_table, find_n_for_quantile, format_percent_value, luck_percentile,
    success_curve,
};
use pityplan::build_info;
use pityplan::core::constants::{DEFAULT_CURVE_STRIDE, DEFAULT_MC_SAMPLES, PITY_STEP};
use pityplan::core::types::PityAlloc;
use pityplan::error::validate_quantile;
use pityplan::pity::{auto_max_draws, plan_within};
use pityplan::scenario::Scenario;
use pityplan::simulator::{
    monte_carlo_curve, monte_carlo_points, run_plan, Replay, SimConfig, SingleRun,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pityplan", about = "Gacha pity planning and success probabilities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ScenarioArgs {
    /// Scenario JSON file (targets, settings, resources); first-visit defaults if omitted
    #[arg(short, long, env = "PITYPLAN_SCENARIO")]
    scenario: Option<PathBuf>,

    /// Horizon override in draws (default: one pity checkpoint per wanted item)
    #[arg(long)]
    max_draws: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full report: plan, success at your draws, quantiles, pity table
    Report {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Monte Carlo samples per point (0 = skip)
        #[arg(long = "mc", default_value_t = 0)]
        mc_samples: u32,

        /// Monte Carlo seed
        #[arg(long, default_value_t = 0)]
        mc_seed: u32,

        /// Number of single-run replays to summarise
        #[arg(long, default_value_t = 0)]
        replays: u32,

        /// Replay seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Save a timestamped JSON copy of the report
        #[arg(long)]
        save: bool,
    },

    /// Draws needed to reach one or more success quantiles
    Quantile {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Quantile in (0, 1] (repeatable)
        #[arg(short = 'q', long = "quantile", action = clap::ArgAction::Append)]
        quantiles: Vec<f64>,
    },

    /// "Luckier than X%" for a session that finished in N draws
    Luck {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Draws the session actually took
        draws: u32,
    },

    /// Success just before and at every pity checkpoint
    Table {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// Sampled success curve, for plotting
    Curve {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Sample every N draws (checkpoint boundaries are always included)
        #[arg(long, default_value_t = DEFAULT_CURVE_STRIDE)]
        stride: u32,
    },

    /// Monte Carlo estimate at the checkpoint boundaries
    Mc {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Samples per point
        #[arg(long, default_value_t = DEFAULT_MC_SAMPLES)]
        samples: u32,

        /// LCG seed
        #[arg(long, default_value_t = 0)]
        seed: u32,
    },

    /// Simulate one pull session draw by draw
    Replay {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Print every emitted progress point, not just the obtained items
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print version and build information
    Version,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            scenario,
            mc_samples,
            mc_seed,
            replays,
            seed,
            json,
            save,
        } => {
            let config = SimConfig {
                scenario: load_scenario(&scenario)?,
                max_draws: scenario.max_draws,
                mc_samples,
                mc_seed,
                replay_runs: replays,
                seed,
                ..Default::default()
            };
            let report = run_plan(&config);

            if json {
                println!("{}", report.to_json()?);
            } else {
                println!("{}", report.to_text());
            }

            if save {
                let filename = format!(
                    "pity_report_{}.json",
                    chrono::Utc::now().format("%Y%m%d_%H%M%S")
                );
                std::fs::write(&filename, report.to_saved_json()?)
                    .with_context(|| format!("Failed to write {filename}"))?;
                println!("JSON report saved to: {}", filename);
            }
        }

        Commands::Quantile {
            scenario,
            quantiles,
        } => {
            let (sc, n_max, plan) = prepare(&scenario)?;
            let quantiles = if quantiles.is_empty() {
                vec![0.9]
            } else {
                quantiles
            };
            for q in quantiles {
                let q = validate_quantile(q)?;
                let n = find_n_for_quantile(q, &sc.settings, &sc.targets, &plan, n_max);
                println!("{:>6.2}%  {:>6} draws", q * 100.0, n);
            }
        }

        Commands::Luck { scenario, draws } => {
            let (sc, _, plan) = prepare(&scenario)?;
            let pct = luck_percentile(draws, &sc.settings, &sc.targets, &plan);
            // Small percentages need more digits to stay readable.
            let digits = if pct < 1.0 { 4 } else { 2 };
            println!(
                "Finishing within {} draws puts you in the top {}%",
                draws,
                format_percent_value(pct / 100.0, digits)
            );
        }

        Commands::Table { scenario } => {
            let (sc, n_max, plan) = prepare(&scenario)?;
            println!("  Pity   Draws    Before     After");
            for row in before_after_table(&sc.settings, &sc.targets, &plan, n_max) {
                println!(
                    "  {:4}   {:5}   {:>6}%   {:>6}%",
                    row.checkpoint,
                    row.checkpoint * PITY_STEP,
                    format_percent_value(row.before, 2),
                    format_percent_value(row.after, 2)
                );
            }
        }

        Commands::Curve { scenario, stride } => {
            let (sc, n_max, plan) = prepare(&scenario)?;
            for p in success_curve(&sc.settings, &sc.targets, &plan, n_max, stride) {
                println!("{}\t{:.6}", p.n, p.success);
            }
        }

        Commands::Mc {
            scenario,
            samples,
            seed,
        } => {
            let (sc, n_max, plan) = prepare(&scenario)?;
            let points = monte_carlo_points(n_max);
            let curve = monte_carlo_curve(&sc.settings, &sc.targets, &plan, &points, samples, seed);
            for p in curve {
                println!("  {:6}   {:>6}%", p.n, format_percent_value(p.success, 2));
            }
        }

        Commands::Replay {
            scenario,
            seed,
            verbose,
        } => {
            let (sc, n_max, plan) = prepare(&scenario)?;
            let total = sc.resources.to_draws().total;
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };

            let mut replay = Replay::new();
            replay.start(SingleRun::new(total, n_max, &sc.settings, &sc.targets, &plan));
            replay.run_to_end(&mut rng);

            for event in replay.events() {
                println!(
                    "  draw {:5}: {} ({:?}), now {}%",
                    event.n,
                    event.category.name(),
                    event.source,
                    format_percent_value(event.luck, 2)
                );
            }
            if verbose {
                for point in replay.points() {
                    println!(
                        "  {:6}   {:>6}%",
                        point.n,
                        format_percent_value(point.success_probability, 2)
                    );
                }
            }
            match replay.ended() {
                Some(end) if end.complete => println!("Completed after {} draws", end.drawn),
                Some(end) => println!("Ran out after {} draws", end.drawn),
                None => println!("Nothing to draw"),
            }
        }

        Commands::Version => {
            println!("{}", build_info::version_line());
        }
    }

    Ok(())
}

/// Logs go to stderr, filtered by `PITYPLAN_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("PITYPLAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn load_scenario(args: &ScenarioArgs) -> Result<Scenario> {
    match &args.scenario {
        Some(path) => Scenario::load(path)
            .with_context(|| format!("Failed to load scenario {}", path.display())),
        None => Ok(Scenario::default()),
    }
}

/// Scenario, horizon and the plan over that horizon.
fn prepare(args: &ScenarioArgs) -> Result<(Scenario, u32, PityAlloc)> {
    let sc = load_scenario(args)?;
    let n_max = args.max_draws.unwrap_or_else(|| auto_max_draws(&sc.targets));
    let plan = plan_within(n_max, &sc.settings, &sc.targets);
    Ok((sc, n_max, plan))
}
