use std::fmt;

/// Errors raised at the simulation boundary, before any sampling starts
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    InvalidDistributionParameters {
        mean: f64,
        std_dev: f64,
        reason: &'static str,
    },
    /// A trial batch needs at least one trial
    InvalidTrialCount(usize),
    /// Statistics requested over a batch with no values
    EmptyBatch,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidDistributionParameters {
                mean,
                std_dev,
                reason,
            } => {
                write!(
                    f,
                    "invalid return distribution (mean={mean}, std_dev={std_dev}): {reason}"
                )
            }
            SimulationError::InvalidTrialCount(n) => {
                write!(f, "number of trials must be positive, got {n}")
            }
            SimulationError::EmptyBatch => write!(f, "trial batch contains no values"),
        }
    }
}

impl std::error::Error for SimulationError {}

pub type Result<T> = std::result::Result<T, SimulationError>;
