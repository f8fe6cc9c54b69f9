//! Annual return sampling
//!
//! Returns are drawn i.i.d. from a normal distribution per year. The caller
//! owns the random stream, so independent trials only need independent RNGs.

use rand::{Rng, distr::Distribution};
use rand_distr::Normal;

use crate::error::{Result, SimulationError};
use crate::model::{ReturnSequence, validate_distribution};

/// Build the normal distribution for a fund's annual returns
pub fn return_distribution(mean: f64, std_dev: f64) -> Result<Normal<f64>> {
    validate_distribution(mean, std_dev)?;
    Normal::new(mean, std_dev).map_err(|_| SimulationError::InvalidDistributionParameters {
        mean,
        std_dev,
        reason: "std_dev must be non-negative and finite",
    })
}

/// Draw `years` annual return rates from Normal(mean, std_dev).
///
/// Rates are in the same units as `mean` and `std_dev`. Zero years yields an
/// empty sequence.
pub fn generate_return_rates<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std_dev: f64,
    years: usize,
) -> Result<ReturnSequence> {
    let normal = return_distribution(mean, std_dev)?;
    let rates = (0..years).map(|_| normal.sample(rng)).collect();
    Ok(ReturnSequence::new(rates))
}
