//! Plan report generation.

use crate::analysis::{format_percent_value, PityRow, QuantileRow};
use crate::build_info::BuildInfo;
use crate::core::constants::PITY_STEP;
use crate::core::types::{Category, DrawCounts};
use crate::error::PlanError;
use serde::Serialize;

/// Analytic and sampled success at one draw count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct McPoint {
    pub n: u32,
    pub analytic: f64,
    pub sampled: f64,
}

/// How one replay ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReplayOutcome {
    pub completed: bool,
    pub draws: u32,
    pub pity_items: u32,
    pub drawn_items: u32,
}

/// Aggregated results from a batch of replays.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaySummary {
    pub runs: u32,
    pub completed: u32,
    pub avg_draws_to_complete: f64,
    pub fastest: Option<u32>,
    pub slowest: Option<u32>,
    pub avg_pity_items: f64,
    #[serde(skip)]
    pub outcomes: Vec<ReplayOutcome>,
}

impl ReplaySummary {
    pub fn from_runs(outcomes: Vec<ReplayOutcome>) -> Self {
        let runs = outcomes.len() as u32;
        let finished: Vec<u32> = outcomes
            .iter()
            .filter(|o| o.completed)
            .map(|o| o.draws)
            .collect();
        let completed = finished.len() as u32;

        let avg_draws_to_complete =
            finished.iter().map(|&d| d as f64).sum::<f64>() / completed.max(1) as f64;
        let avg_pity_items =
            outcomes.iter().map(|o| o.pity_items as f64).sum::<f64>() / runs.max(1) as f64;

        Self {
            runs,
            completed,
            avg_draws_to_complete,
            fastest: finished.iter().min().copied(),
            slowest: finished.iter().max().copied(),
            avg_pity_items,
            outcomes,
        }
    }

    pub fn completion_rate(&self) -> f64 {
        self.completed as f64 / self.runs.max(1) as f64
    }
}

/// Everything computed for one scenario.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub draws: DrawCounts,
    pub horizon: u32,
    pub plan: Vec<Category>,
    pub success_at_total: f64,
    pub quantiles: Vec<QuantileRow>,
    pub pity_needed: u32,
    pub table: Vec<PityRow>,
    pub monte_carlo: Option<Vec<McPoint>>,
    pub replays: Option<ReplaySummary>,
}

impl PlanReport {
    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                      PITY PLAN REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Draws: {} total ({} ten-pulls, {} singles), horizon {}\n\n",
            self.draws.total, self.draws.n10, self.draws.n1, self.horizon
        ));

        report.push_str("── PITY PLAN ────────────────────────────────────────────────────\n");
        if self.plan.is_empty() {
            report.push_str("  (no checkpoints)\n");
        }
        for (i, c) in self.plan.iter().enumerate() {
            report.push_str(&format!(
                "  #{:<2} at {:>5} draws: {}\n",
                i + 1,
                (i as u32 + 1) * PITY_STEP,
                c.name()
            ));
        }
        report.push('\n');

        report.push_str("── SUCCESS ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  With your draws:     {}%\n",
            format_percent_value(self.success_at_total, 2)
        ));
        report.push_str(&format!(
            "  Pity for 90%:        {} checkpoint(s)\n",
            self.pity_needed
        ));
        for row in &self.quantiles {
            let marker = if row.reachable { "" } else { "  (not reached)" };
            report.push_str(&format!(
                "  {:>5.1}% by draw:     {}{}\n",
                row.q * 100.0,
                row.draws,
                marker
            ));
        }
        report.push('\n');

        if !self.table.is_empty() {
            report.push_str("── PITY CHECKPOINTS ─────────────────────────────────────────────\n");
            report.push_str("  Pity   Before     After      Jump\n");
            report.push_str("  ────   ──────     ─────      ────\n");
            for row in &self.table {
                report.push_str(&format!(
                    "  {:4}   {:>6}%   {:>6}%   +{}%\n",
                    row.checkpoint,
                    format_percent_value(row.before, 2),
                    format_percent_value(row.after, 2),
                    format_percent_value(row.jump(), 2)
                ));
            }
            report.push('\n');
        }

        if let Some(points) = &self.monte_carlo {
            report.push_str("── MONTE CARLO CHECK ────────────────────────────────────────────\n");
            report.push_str("     Draws   Analytic    Sampled\n");
            for p in points {
                report.push_str(&format!(
                    "  {:8}   {:>7}%   {:>7}%\n",
                    p.n,
                    format_percent_value(p.analytic, 2),
                    format_percent_value(p.sampled, 2)
                ));
            }
            report.push('\n');
        }

        if let Some(replays) = &self.replays {
            report.push_str("── REPLAYS ──────────────────────────────────────────────────────\n");
            report.push_str(&format!(
                "  Runs: {} total, {} completed ({:.1}%)\n",
                replays.runs,
                replays.completed,
                replays.completion_rate() * 100.0
            ));
            if let (Some(fastest), Some(slowest)) = (replays.fastest, replays.slowest) {
                report.push_str(&format!(
                    "  Draws to finish:     avg {:.0}, fastest {}, slowest {}\n",
                    replays.avg_draws_to_complete, fastest, slowest
                ));
            }
            report.push_str(&format!(
                "  Avg items from pity: {:.2}\n\n",
                replays.avg_pity_items
            ));
        }

        report.push_str("═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> Result<String, PlanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON for a saved file: the report plus the build that produced it.
    pub fn to_saved_json(&self) -> Result<String, PlanError> {
        #[derive(Serialize)]
        struct Saved<'a> {
            build: BuildInfo,
            report: &'a PlanReport,
        }
        Ok(serde_json::to_string_pretty(&Saved {
            build: BuildInfo::current(),
            report: self,
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(completed: bool, draws: u32) -> ReplayOutcome {
        ReplayOutcome {
            completed,
            draws,
            pity_items: 1,
            drawn_items: 2,
        }
    }

    #[test]
    fn test_replay_summary() {
        let summary = ReplaySummary::from_runs(vec![
            outcome(true, 120),
            outcome(true, 380),
            outcome(false, 219),
        ]);
        assert_eq!(summary.runs, 3);
        assert_eq!(summary.completed, 2);
        assert!((summary.avg_draws_to_complete - 250.0).abs() < 1e-9);
        assert_eq!(summary.fastest, Some(120));
        assert_eq!(summary.slowest, Some(380));
        assert!((summary.completion_rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        let summary = ReplaySummary::from_runs(Vec::new());
        assert_eq!(summary.completion_rate(), 0.0);
        assert_eq!(summary.fastest, None);
    }

    fn sample_report() -> PlanReport {
        PlanReport {
            draws: DrawCounts {
                n10: 19,
                n1: 29,
                total: 219,
            },
            horizon: 1000,
            plan: vec![Category::E, Category::T],
            success_at_total: 0.25,
            quantiles: vec![QuantileRow {
                q: 0.9,
                draws: 1000,
                reachable: false,
            }],
            pity_needed: 5,
            table: vec![PityRow {
                checkpoint: 1,
                before: 0.1,
                after: 0.3,
            }],
            monte_carlo: None,
            replays: Some(ReplaySummary::from_runs(vec![outcome(true, 100)])),
        }
    }

    #[test]
    fn test_text_report_sections() {
        let report = sample_report();
        let text = report.to_text();
        assert!(text.contains("PITY PLAN REPORT"));
        assert!(text.contains("E.G.O"));
        assert!(text.contains("25.00%"));
        assert!(text.contains("(not reached)"));
        assert!(text.contains("REPLAYS"));
        assert!(!text.contains("MONTE CARLO"));

        let json = report.to_json().unwrap();
        assert!(json.contains("\"successAtTotal\": 0.25"));
        assert!(json.contains("\"pityNeeded\": 5"));
    }

    #[test]
    fn test_saved_json_carries_build_stamp() {
        let saved = sample_report().to_saved_json().unwrap();
        let doc: serde_json::Value = serde_json::from_str(&saved).unwrap();
        assert_eq!(doc["build"]["version"], BuildInfo::current().version);
        assert_eq!(doc["report"]["pityNeeded"], 5);
        assert_eq!(doc["report"]["plan"], serde_json::json!(["E", "T"]));
    }
}
