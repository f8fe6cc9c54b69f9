//! Console and JSON rendering of comparison results

use fundsim_core::{FundComparison, FundOutcome, ValueTrajectory};
use serde::Serialize;

use crate::util::format::{format_compact_currency, format_currency_short, format_percentage};

/// Settings echoed alongside the results
#[derive(Debug, Clone, Serialize)]
pub struct ReportHeader {
    pub num_trials: usize,
    pub years: usize,
    pub annual_contribution: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    header: &'a ReportHeader,
    funds: &'a [FundOutcome],
}

pub fn render_json(
    header: &ReportHeader,
    comparison: &FundComparison,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        header,
        funds: &comparison.outcomes,
    })
}

pub fn render_text(header: &ReportHeader, comparison: &FundComparison) -> String {
    let mut out = format!(
        "Fund comparison: {} trials over {} years, {} contributed per year\n",
        header.num_trials,
        header.years,
        format_currency_short(header.annual_contribution)
    );

    for outcome in &comparison.outcomes {
        out.push('\n');
        out.push_str(&render_outcome(outcome));
    }

    if let Some(best) = comparison.best_expected_value() {
        out.push_str(&format!(
            "\nHighest expected value: {} ({})\n",
            best.fund.label(),
            format_compact_currency(best.summary.expected_value)
        ));
    }

    out
}

fn render_outcome(outcome: &FundOutcome) -> String {
    let fund = &outcome.fund;
    let summary = &outcome.summary;

    let mut out = format!(
        "{}  (mean {:.2}%, std {:.2}%)\n",
        fund.label(),
        fund.mean_return,
        fund.std_return
    );
    out.push_str(&format!(
        "  {:<18}{:>16}\n",
        "Expected value",
        format_currency_short(summary.expected_value)
    ));
    out.push_str(&format!(
        "  {:<18}{:>16}\n",
        "Median",
        format_currency_short(summary.median)
    ));
    out.push_str(&format!(
        "  {:<18}{:>16}\n",
        "Std deviation",
        format_currency_short(summary.std_dev)
    ));

    if let (Some(p5), Some(p95)) = (summary.percentile(0.05), summary.percentile(0.95)) {
        out.push_str(&format!(
            "  {:<18}{:>16} - {}\n",
            "P5 - P95",
            format_currency_short(p5),
            format_currency_short(p95)
        ));
    }

    if !summary.goal_probabilities.is_empty() {
        out.push_str("  Goal probabilities\n");
        for goal in &summary.goal_probabilities {
            out.push_str(&format!(
                "    >= {:<14}{:>16}\n",
                format_currency_short(goal.threshold),
                format_percentage(goal.probability)
            ));
        }
    }

    out
}

/// Year-by-year table for one illustrative trial
pub fn render_trajectory(label: &str, trajectory: &ValueTrajectory) -> String {
    let mut out = format!("Sample trajectory: {label}\n");
    if trajectory.is_empty() {
        out.push_str("  (no years simulated)\n");
        return out;
    }

    for (i, value) in trajectory.iter().enumerate() {
        out.push_str(&format!(
            "  Year {:>3}  {:>16}\n",
            i + 1,
            format_currency_short(value)
        ));
    }
    out
}
