//! Side-by-side comparison of several funds under the same trial settings

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{DistributionSummary, FundParameters};
use crate::simulation::{TrialConfig, derive_seed, run_fund_trials};
use crate::statistics::summarize;

/// Summary of one fund within a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundOutcome {
    pub fund: FundParameters,
    pub summary: DistributionSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundComparison {
    /// Outcomes in the order the funds were given
    pub outcomes: Vec<FundOutcome>,
}

impl FundComparison {
    /// Fund with the highest expected final value
    pub fn best_expected_value(&self) -> Option<&FundOutcome> {
        self.outcomes
            .iter()
            .max_by(|a, b| a.summary.expected_value.total_cmp(&b.summary.expected_value))
    }

    /// Fund most likely to reach `threshold`, if that threshold was summarized
    pub fn best_probability(&self, threshold: f64) -> Option<&FundOutcome> {
        self.outcomes
            .iter()
            .filter_map(|o| o.summary.probability(threshold).map(|p| (o, p)))
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(o, _)| o)
    }
}

/// Run every fund through its own independent trial batch and summarize it.
///
/// A seeded config gives each fund a distinct stream derived from the seed and
/// the fund's position. Any invalid fund aborts the whole comparison.
pub fn compare_funds(
    funds: &[FundParameters],
    config: &TrialConfig,
    thresholds: &[f64],
) -> Result<FundComparison> {
    config.validate()?;
    for fund in funds {
        fund.validate()?;
    }

    let base_seed = config.resolve_seed();
    let mut outcomes = Vec::with_capacity(funds.len());

    for (i, fund) in funds.iter().enumerate() {
        let fund_config = TrialConfig {
            num_trials: config.num_trials,
            seed: Some(derive_seed(base_seed, u64::MAX - i as u64)),
        };
        let batch = run_fund_trials(fund, &fund_config)?;
        let summary = summarize(&batch, thresholds)?;

        tracing::debug!(
            fund = %fund.label(),
            expected_value = summary.expected_value,
            "fund summarized"
        );

        outcomes.push(FundOutcome {
            fund: fund.clone(),
            summary,
        });
    }

    Ok(FundComparison { outcomes })
}
