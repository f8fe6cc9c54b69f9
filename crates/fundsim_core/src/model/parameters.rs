use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// Statistical identity of a fund.
///
/// `mean_return` and `std_return` are annual rates in percent (8.0 means 8%).
/// Contributions are added at the start of every year, before that year's return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub mean_return: f64,
    pub std_return: f64,
    pub years: usize,
    pub annual_contribution: f64,
    #[serde(default)]
    pub starting_principal: f64,
}

impl FundParameters {
    pub fn new(mean_return: f64, std_return: f64, years: usize, annual_contribution: f64) -> Self {
        Self {
            name: None,
            mean_return,
            std_return,
            years,
            annual_contribution,
            starting_principal: 0.0,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_starting_principal(mut self, principal: f64) -> Self {
        self.starting_principal = principal;
        self
    }

    /// Display label, falling back to the return profile when unnamed
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{:.1}% ± {:.1}%", self.mean_return, self.std_return),
        }
    }

    /// Reject parameters that cannot describe a normal return distribution
    pub fn validate(&self) -> Result<()> {
        validate_distribution(self.mean_return, self.std_return)
    }
}

pub(crate) fn validate_distribution(mean: f64, std_dev: f64) -> Result<()> {
    let reason = if !mean.is_finite() {
        "mean must be finite"
    } else if !std_dev.is_finite() || std_dev < 0.0 {
        "std_dev must be non-negative and finite"
    } else {
        return Ok(());
    };

    Err(SimulationError::InvalidDistributionParameters {
        mean,
        std_dev,
        reason,
    })
}

/// Linear relationship between a fund's mean return and its volatility,
/// fitted externally to historical fund data. Both axes are in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityFit {
    pub slope: f64,
    pub intercept: f64,
}

impl VolatilityFit {
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Volatility implied by the fit. Negative values clamp to zero.
    pub fn std_for_mean(&self, mean_return: f64) -> f64 {
        (self.slope * mean_return + self.intercept).max(0.0)
    }

    /// Build a fund whose volatility follows the fit
    pub fn fund(&self, mean_return: f64, years: usize, annual_contribution: f64) -> FundParameters {
        FundParameters::new(
            mean_return,
            self.std_for_mean(mean_return),
            years,
            annual_contribution,
        )
    }
}
