//! Core data types for fund simulations
//!
//! - `parameters` - Fund parameters and the mean/volatility fit
//! - `results` - Return sequences, trajectories, trial batches and summaries

mod parameters;
mod results;

pub use parameters::*;
pub(crate) use parameters::validate_distribution;
pub use results::*;
