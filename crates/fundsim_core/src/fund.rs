//! Single-trial fund model: sample one return per year, then accumulate.

use rand::{Rng, distr::Distribution};
use rand_distr::Normal;

use crate::accumulate::{calculate_fund_returns, final_fund_value};
use crate::error::Result;
use crate::market::{generate_return_rates, return_distribution};
use crate::model::{FundParameters, ValueTrajectory};

/// Simulate one trajectory of a fund starting from an empty account.
///
/// `return_mean_pct` and `return_std_pct` are percentages; sampled rates are
/// divided by 100 before accumulation.
pub fn make_mutual_fund<R: Rng + ?Sized>(
    rng: &mut R,
    return_mean_pct: f64,
    return_std_pct: f64,
    years: usize,
    yearly_addition: f64,
) -> Result<ValueTrajectory> {
    let rates =
        generate_return_rates(rng, return_mean_pct, return_std_pct, years)?.into_fractional();
    Ok(calculate_fund_returns(yearly_addition, rates.rates(), 0.0))
}

impl FundParameters {
    /// Simulate one full trajectory of this fund
    pub fn simulate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ValueTrajectory> {
        let rates = generate_return_rates(rng, self.mean_return, self.std_return, self.years)?
            .into_fractional();
        Ok(calculate_fund_returns(
            self.annual_contribution,
            rates.rates(),
            self.starting_principal,
        ))
    }

    /// Validate once and build a sampler for repeated trials
    pub fn sampler(&self) -> Result<FundSampler<'_>> {
        Ok(FundSampler {
            params: self,
            distribution: return_distribution(self.mean_return, self.std_return)?,
        })
    }
}

/// Validated fund ready for many trials.
///
/// Holds the return distribution so trials skip re-validation, and computes
/// final values without allocating trajectories.
#[derive(Debug, Clone, Copy)]
pub struct FundSampler<'a> {
    params: &'a FundParameters,
    distribution: Normal<f64>,
}

impl FundSampler<'_> {
    pub fn params(&self) -> &FundParameters {
        self.params
    }

    /// Final account value of one independent trial
    pub fn final_value<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let rates = (0..self.params.years).map(|_| self.distribution.sample(rng) / 100.0);
        final_fund_value(
            self.params.annual_contribution,
            rates,
            self.params.starting_principal,
        )
    }
}
