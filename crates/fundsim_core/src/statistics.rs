//! Distribution statistics over a batch of trial outcomes

use crate::error::{Result, SimulationError};
use crate::model::{DistributionSummary, GoalProbability, TrialBatch};

/// Tolerance for floating-point percentile lookup
pub const PERCENTILE_TOLERANCE: f64 = 0.001;

/// Percentiles reported in every summary
pub const STANDARD_PERCENTILES: [f64; 5] = [0.05, 0.25, 0.50, 0.75, 0.95];

/// Reduce a batch into its expected value and goal-attainment probabilities.
///
/// A trial meets a goal when its final value is greater than or equal to the
/// threshold. Probabilities are reported in the order thresholds were given.
pub fn summarize(batch: &TrialBatch, thresholds: &[f64]) -> Result<DistributionSummary> {
    let values = batch.final_values();
    if values.is_empty() {
        return Err(SimulationError::EmptyBatch);
    }

    let n = values.len() as f64;
    let expected_value = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|v| (v - expected_value).powi(2))
        .sum::<f64>()
        / n;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let percentile_values = STANDARD_PERCENTILES
        .iter()
        .map(|&p| (p, nearest_rank(&sorted, p)))
        .collect();

    let goal_probabilities = thresholds
        .iter()
        .map(|&threshold| GoalProbability {
            threshold,
            probability: goal_probability(values, threshold),
        })
        .collect();

    Ok(DistributionSummary {
        num_trials: values.len(),
        expected_value,
        median: nearest_rank(&sorted, 0.5),
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        percentile_values,
        goal_probabilities,
    })
}

/// Fraction of values at or above `threshold`. Zero for an empty slice.
pub fn goal_probability(values: &[f64], threshold: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let hits = values.iter().filter(|&&v| v >= threshold).count();
    hits as f64 / values.len() as f64
}

/// Nearest-rank percentile of an ascending, non-empty slice
fn nearest_rank(sorted: &[f64], percentile: f64) -> f64 {
    let rank = (percentile * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(values: &[f64]) -> TrialBatch {
        TrialBatch::new(values.to_vec())
    }

    #[test]
    fn test_expected_value_is_mean() {
        let summary = summarize(&batch(&[1.0, 2.0, 3.0, 6.0]), &[]).unwrap();
        assert_eq!(summary.expected_value, 3.0);
        assert_eq!(summary.num_trials, 4);
        assert!(summary.goal_probabilities.is_empty());
    }

    #[test]
    fn test_ties_meet_the_goal() {
        let summary = summarize(&batch(&[100.0, 200.0, 200.0, 300.0]), &[200.0]).unwrap();
        assert_eq!(summary.probability(200.0), Some(0.75));
    }

    #[test]
    fn test_probabilities_follow_threshold_order() {
        let summary = summarize(&batch(&[1.0, 2.0, 3.0, 4.0]), &[4.0, 0.0, 5.0]).unwrap();
        let probs: Vec<f64> = summary
            .goal_probabilities
            .iter()
            .map(|g| g.probability)
            .collect();
        assert_eq!(probs, vec![0.25, 1.0, 0.0]);
    }

    #[test]
    fn test_spread_statistics() {
        let values: Vec<f64> = (1..=100).map(f64::from).collect();
        let summary = summarize(&TrialBatch::new(values), &[]).unwrap();

        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 100.0);
        assert_eq!(summary.median, 50.0);
        assert_eq!(summary.percentile(0.05), Some(5.0));
        assert_eq!(summary.percentile(0.95), Some(95.0));
        // Population std of 1..=100
        assert!((summary.std_dev - 28.866_070_047_722_12).abs() < 1e-9);
    }

    #[test]
    fn test_single_value_batch() {
        let summary = summarize(&batch(&[42.0]), &[42.0, 43.0]).unwrap();
        assert_eq!(summary.median, 42.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.percentile(0.05), Some(42.0));
        assert_eq!(summary.probability(42.0), Some(1.0));
        assert_eq!(summary.probability(43.0), Some(0.0));
    }

    #[test]
    fn test_empty_batch_is_an_error() {
        assert_eq!(
            summarize(&TrialBatch::default(), &[1.0]),
            Err(SimulationError::EmptyBatch)
        );
        assert_eq!(goal_probability(&[], 1.0), 0.0);
    }
}
