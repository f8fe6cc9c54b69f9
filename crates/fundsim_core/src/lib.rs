//! Fund volatility simulation library
//!
//! This crate provides a Monte Carlo engine for comparing hypothetical funds that
//! differ in mean annual return and volatility. It supports:
//! - Normally distributed annual returns, one independent draw per year
//! - Front-loaded yearly contributions (each year's contribution earns that year's return)
//! - Large trial batches with per-batch random streams, optionally in parallel
//! - Expected value, spread, percentiles and goal-attainment probabilities
//! - A linear mean/volatility fit for deriving a fund's volatility from its mean
//!
//! # Example
//!
//! ```ignore
//! use fundsim_core::{FundParameters, TrialConfig, run_fund_trials, summarize};
//!
//! let fund = FundParameters::new(8.0, 12.0, 40, 5_500.0);
//! let batch = run_fund_trials(&fund, &TrialConfig::new(100_000))?;
//! let summary = summarize(&batch, &[1_000_000.0, 2_000_000.0])?;
//! println!("expected: {:.0}", summary.expected_value);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod accumulate;
pub mod comparison;
pub mod error;
pub mod fund;
pub mod market;
pub mod simulation;
pub mod statistics;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use accumulate::{calculate_fund_returns, final_fund_value};
pub use comparison::{FundComparison, FundOutcome, compare_funds};
pub use error::SimulationError;
pub use fund::{FundSampler, make_mutual_fund};
pub use market::generate_return_rates;
pub use model::{
    DistributionSummary, FundParameters, GoalProbability, ReturnSequence, TrialBatch,
    ValueTrajectory, VolatilityFit,
};
pub use simulation::{TrialConfig, run_fund_trials, run_trials};
pub use statistics::summarize;
