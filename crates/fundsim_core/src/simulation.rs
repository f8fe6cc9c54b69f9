use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::{Result, SimulationError};
use crate::model::{FundParameters, TrialBatch, ValueTrajectory};

/// Trials per RNG stream. Each batch owns one `SmallRng`.
pub const MAX_BATCH_SIZE: usize = 100;

/// How many trials to run and how to seed them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialConfig {
    pub num_trials: usize,
    /// Base seed for reproducible runs. `None` draws a fresh seed from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            num_trials: 10_000,
            seed: None,
        }
    }
}

impl TrialConfig {
    pub fn new(num_trials: usize) -> Self {
        Self {
            num_trials,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_trials == 0 {
            return Err(SimulationError::InvalidTrialCount(self.num_trials));
        }
        Ok(())
    }

    /// Seed for this run: the configured one, or fresh entropy
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// Derive an independent stream seed from a base seed and a stream index
pub(crate) fn derive_seed(base_seed: u64, index: u64) -> u64 {
    splitmix64(base_seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Run a fund model `num_trials` times and keep each trajectory's final value.
///
/// Trials run in order on the calling thread. The first error aborts the batch.
/// A zero-year trajectory contributes 0.
pub fn run_trials<F>(mut fund_model: F, num_trials: usize) -> Result<TrialBatch>
where
    F: FnMut() -> Result<ValueTrajectory>,
{
    TrialConfig::new(num_trials).validate()?;

    let mut final_values = Vec::with_capacity(num_trials);
    for _ in 0..num_trials {
        let trajectory = fund_model()?;
        final_values.push(trajectory.final_value().unwrap_or(0.0));
    }

    Ok(TrialBatch::new(final_values))
}

/// Run independent trials of a fund, streaming final values only.
///
/// Trials are split into batches of `MAX_BATCH_SIZE`, each with its own RNG
/// seeded from the run seed and the batch index. With the `parallel` feature
/// the batches run on the rayon pool; a seeded run produces the same batch
/// either way.
pub fn run_fund_trials(params: &FundParameters, config: &TrialConfig) -> Result<TrialBatch> {
    config.validate()?;
    let sampler = params.sampler()?;

    let num_trials = config.num_trials;
    let base_seed = config.resolve_seed();
    let num_batches = num_trials.div_ceil(MAX_BATCH_SIZE);

    tracing::debug!(
        fund = %params.label(),
        num_trials,
        num_batches,
        base_seed,
        "running fund trials"
    );

    let run_batch = |i: usize| {
        let mut rng = SmallRng::seed_from_u64(derive_seed(base_seed, i as u64));

        let batch_size = if i == num_batches - 1 {
            num_trials - i * MAX_BATCH_SIZE
        } else {
            MAX_BATCH_SIZE
        };

        (0..batch_size)
            .map(|_| sampler.final_value(&mut rng))
            .collect::<Vec<_>>()
    };

    #[cfg(feature = "parallel")]
    let final_values: Vec<f64> = (0..num_batches)
        .into_par_iter()
        .flat_map_iter(run_batch)
        .collect();

    #[cfg(not(feature = "parallel"))]
    let final_values: Vec<f64> = (0..num_batches).flat_map(run_batch).collect();

    Ok(TrialBatch::new(final_values))
}
