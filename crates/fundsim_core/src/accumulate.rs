//! Year-by-year accumulation of contributions and returns
//!
//! Each year the contribution lands first and is then exposed to that year's
//! full return: `principal = (principal + contribution) * (1 + rate)`.

use crate::model::ValueTrajectory;

#[inline]
fn grow_one_year(principal: f64, contribution: f64, rate: f64) -> f64 {
    (principal + contribution) * (1.0 + rate)
}

/// Apply fractional annual returns to a contribution schedule.
///
/// Returns the account value at the end of every year. Negative contributions
/// are treated as withdrawals. An empty return sequence yields an empty
/// trajectory.
pub fn calculate_fund_returns(
    contribution_per_year: f64,
    returns_by_year: &[f64],
    starting_principal: f64,
) -> ValueTrajectory {
    let mut principal = starting_principal;
    let values = returns_by_year
        .iter()
        .map(|&rate| {
            principal = grow_one_year(principal, contribution_per_year, rate);
            principal
        })
        .collect();

    ValueTrajectory::new(values)
}

/// Final account value without materializing the trajectory.
///
/// Produces the same number as the last element of `calculate_fund_returns`,
/// or `starting_principal` when there are no returns.
pub fn final_fund_value<I>(
    contribution_per_year: f64,
    returns_by_year: I,
    starting_principal: f64,
) -> f64
where
    I: IntoIterator<Item = f64>,
{
    returns_by_year
        .into_iter()
        .fold(starting_principal, |principal, rate| {
            grow_one_year(principal, contribution_per_year, rate)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_values_approx(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() < 1e-9, "year {}: expected {e}, got {a}", i + 1);
        }
    }

    #[test]
    fn test_zero_returns_accumulate_contributions() {
        let trajectory = calculate_fund_returns(1000.0, &[0.0, 0.0, 0.0], 0.0);
        assert_values_approx(trajectory.values(), &[1000.0, 2000.0, 3000.0]);
    }

    #[test]
    fn test_pure_compounding() {
        let trajectory = calculate_fund_returns(0.0, &[0.10, 0.10], 1000.0);
        assert_values_approx(trajectory.values(), &[1100.0, 1210.0]);
    }

    #[test]
    fn test_total_loss_wipes_contribution() {
        let trajectory = calculate_fund_returns(100.0, &[-1.0], 0.0);
        assert_eq!(trajectory.values(), &[0.0]);
    }

    #[test]
    fn test_contribution_is_exposed_to_same_year_return() {
        // 100 in, +50% => 150; then 150 + 100 = 250, -20% => 200
        let trajectory = calculate_fund_returns(100.0, &[0.5, -0.2], 0.0);
        assert_values_approx(trajectory.values(), &[150.0, 200.0]);
    }

    #[test]
    fn test_negative_contribution_withdraws() {
        let trajectory = calculate_fund_returns(-100.0, &[0.0, 0.0], 500.0);
        assert_values_approx(trajectory.values(), &[400.0, 300.0]);
    }

    #[test]
    fn test_empty_returns() {
        let trajectory = calculate_fund_returns(1000.0, &[], 250.0);
        assert!(trajectory.is_empty());
        assert_eq!(final_fund_value(1000.0, Vec::<f64>::new(), 250.0), 250.0);
    }

    #[test]
    fn test_final_value_matches_trajectory() {
        let returns = [0.07, -0.15, 0.22, 0.03, -0.01, 0.12];
        let trajectory = calculate_fund_returns(5500.0, &returns, 1200.0);
        let streamed = final_fund_value(5500.0, returns, 1200.0);

        assert_eq!(trajectory.len(), returns.len());
        assert_eq!(trajectory.final_value(), Some(streamed));
    }
}
