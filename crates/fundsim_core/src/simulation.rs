//! Monte Carlo simulation of yearly portfolio values
//!
//! Each run draws a growth factor per year from a normal distribution,
//! builds a relative index trajectory and converts it into absolute
//! portfolio values, applying each year's cash flow before growth.

use crate::config::SimulationOptions;
use crate::error::SimulationError;
use crate::random::RandomStream;

/// Index value every trajectory starts from
const BASE_INDEX: f64 = 100.0;

/// Simulate all portfolio trajectories for one batch.
///
/// Returns one row per year (`num_years + 1` rows of `num_runs` values),
/// so `result[year][run]` is the rounded portfolio value of one trajectory
/// at one year. `cash_flows` must cover at least `num_years` entries and
/// `num_years` is the derived horizon, which may exceed
/// `options.num_years` when a project starts later.
///
/// All runs draw from the single `random` stream in run order, so a seeded
/// stream makes the whole table reproducible.
pub fn simulate_outcomes(
    cash_flows: &[f64],
    options: &SimulationOptions,
    num_years: usize,
    random: &mut RandomStream,
) -> Result<Vec<Vec<f64>>, SimulationError> {
    let mut result = vec![vec![0.0; options.num_runs]; num_years + 1];
    let mut trajectory = vec![0.0; num_years + 1];

    for run in 0..options.num_runs {
        simulate_single_outcome(&mut trajectory, cash_flows, options, num_years, random)?;
        for (row, value) in result.iter_mut().zip(&trajectory) {
            row[run] = *value;
        }
    }

    Ok(result)
}

/// Fill `trajectory` with the absolute values of one simulated run.
fn simulate_single_outcome(
    trajectory: &mut [f64],
    cash_flows: &[f64],
    options: &SimulationOptions,
    num_years: usize,
    random: &mut RandomStream,
) -> Result<(), SimulationError> {
    trajectory[0] = BASE_INDEX;
    for year in 0..num_years {
        let growth = 1.0 + random.normal(options.performance, options.volatility)?;
        trajectory[year + 1] = trajectory[year] * growth;
    }

    to_absolute_values(trajectory, cash_flows, options.investment_amount);
    Ok(())
}

/// Convert a relative index trajectory into absolute portfolio values,
/// in place.
///
/// The stored value per year is rounded to whole currency units while the
/// carried value stays exact, so rounding never compounds across years.
fn to_absolute_values(trajectory: &mut [f64], cash_flows: &[f64], investment_amount: f64) {
    let mut portfolio_value = investment_amount;
    let mut previous_index = BASE_INDEX;

    for (year, slot) in trajectory.iter_mut().enumerate() {
        let current_index = *slot;
        // cash moves at the start of the year, before growth applies
        let cash_flow = if year == 0 { 0.0 } else { cash_flows[year - 1] };

        portfolio_value = (portfolio_value + cash_flow) * (current_index / previous_index);

        *slot = portfolio_value.round();
        previous_index = current_index;
    }
}
