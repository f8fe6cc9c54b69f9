//! Simulation outputs
//!
//! Trajectories and return sequences live for a single trial. Only the final
//! value of each trial is kept in a `TrialBatch`, which is then reduced into a
//! `DistributionSummary` for reporting.

use serde::{Deserialize, Serialize};

use crate::statistics::PERCENTILE_TOLERANCE;

/// Annual return rates for one trial, one entry per simulated year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnSequence(Vec<f64>);

impl ReturnSequence {
    pub fn new(rates: Vec<f64>) -> Self {
        Self(rates)
    }

    pub fn rates(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert percent-denominated rates (8.0) into fractional rates (0.08)
    #[must_use]
    pub fn into_fractional(self) -> Self {
        Self(self.0.into_iter().map(|r| r / 100.0).collect())
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for ReturnSequence {
    fn from(rates: Vec<f64>) -> Self {
        Self(rates)
    }
}

/// Account value at the end of each simulated year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueTrajectory(Vec<f64>);

impl ValueTrajectory {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at the end of the last year, `None` for a zero-year trajectory
    pub fn final_value(&self) -> Option<f64> {
        self.0.last().copied()
    }

    /// Value at the end of `year` (1-based)
    pub fn value_at_year(&self, year: usize) -> Option<f64> {
        year.checked_sub(1).and_then(|i| self.0.get(i).copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

/// Final account values of independent trials
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialBatch {
    final_values: Vec<f64>,
}

impl TrialBatch {
    pub fn new(final_values: Vec<f64>) -> Self {
        Self { final_values }
    }

    pub fn final_values(&self) -> &[f64] {
        &self.final_values
    }

    pub fn num_trials(&self) -> usize {
        self.final_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.final_values.is_empty()
    }
}

/// Probability that a trial ends at or above `threshold`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProbability {
    pub threshold: f64,
    pub probability: f64,
}

/// Aggregate statistics over a `TrialBatch`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub num_trials: usize,
    pub expected_value: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// (percentile as 0-1, value) pairs, ascending
    pub percentile_values: Vec<(f64, f64)>,
    /// One entry per requested threshold, in request order
    pub goal_probabilities: Vec<GoalProbability>,
}

impl DistributionSummary {
    /// Goal probability for an exact threshold that was requested
    pub fn probability(&self, threshold: f64) -> Option<f64> {
        self.goal_probabilities
            .iter()
            .find(|g| g.threshold == threshold)
            .map(|g| g.probability)
    }

    pub fn percentile(&self, target: f64) -> Option<f64> {
        self.percentile_values
            .iter()
            .find(|(p, _)| (*p - target).abs() < PERCENTILE_TOLERANCE)
            .map(|(_, v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_sequence_to_fractional() {
        let seq = ReturnSequence::new(vec![8.0, -12.5, 0.0]).into_fractional();
        assert_eq!(seq.rates(), &[0.08, -0.125, 0.0]);
    }

    #[test]
    fn test_trajectory_accessors() {
        let trajectory = ValueTrajectory::new(vec![1000.0, 2100.0, 3300.0]);

        assert_eq!(trajectory.final_value(), Some(3300.0));
        assert_eq!(trajectory.value_at_year(1), Some(1000.0));
        assert_eq!(trajectory.value_at_year(3), Some(3300.0));
        assert_eq!(trajectory.value_at_year(0), None);
        assert_eq!(trajectory.value_at_year(4), None);
        assert!(ValueTrajectory::default().final_value().is_none());
    }

    #[test]
    fn test_summary_lookups() {
        let summary = DistributionSummary {
            num_trials: 4,
            expected_value: 2.5,
            median: 2.0,
            std_dev: 1.118,
            min: 1.0,
            max: 4.0,
            percentile_values: vec![(0.05, 1.0), (0.5, 2.0), (0.95, 4.0)],
            goal_probabilities: vec![
                GoalProbability {
                    threshold: 2.0,
                    probability: 0.75,
                },
                GoalProbability {
                    threshold: 4.0,
                    probability: 0.25,
                },
            ],
        };

        assert_eq!(summary.probability(2.0), Some(0.75));
        assert_eq!(summary.probability(3.0), None);
        assert_eq!(summary.percentile(0.5000001), Some(2.0));
        assert_eq!(summary.percentile(0.25), None);
    }
}
