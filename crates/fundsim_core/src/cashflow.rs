//! Yearly cash flows and the no-interest reference line

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::model::Project;

/// Net cash flow per year and the portfolio value those flows would leave
/// behind without any interest.
///
/// Both vectors hold `num_years + 1` entries so every valid project start
/// year, including the final one, has a reference value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    /// Net flow per year; project withdrawals make entries negative
    pub cash_flows: Vec<f64>,
    /// `investment_amount` plus all flows up to and including each year
    pub no_interest_reference_line: Vec<f64>,
}

/// Aggregate project withdrawals into a yearly schedule.
///
/// Projects sharing a start year sum into a single flow entry. Fails on the
/// first project with a non-finite or negative amount, or one starting past
/// the horizon.
pub fn build_schedule(
    projects: &[Project],
    investment_amount: f64,
    num_years: usize,
) -> Result<CashFlowSchedule, OptionsError> {
    let mut cash_flows = vec![0.0; num_years + 1];

    for (index, project) in projects.iter().enumerate() {
        if !project.total_amount.is_finite() || project.total_amount < 0.0 {
            return Err(OptionsError::ProjectAmountInvalid {
                index,
                amount: project.total_amount,
            });
        }
        if project.start_year > num_years {
            return Err(OptionsError::ProjectBeyondHorizon {
                index,
                start_year: project.start_year,
                num_years,
            });
        }
        cash_flows[project.start_year] -= project.total_amount;
    }

    let mut no_interest_reference_line = Vec::with_capacity(num_years + 1);
    let mut remaining = investment_amount;
    for flow in &cash_flows {
        remaining += flow;
        no_interest_reference_line.push(remaining);
    }

    Ok(CashFlowSchedule {
        cash_flows,
        no_interest_reference_line,
    })
}
