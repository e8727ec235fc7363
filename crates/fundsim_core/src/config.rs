//! Simulation options with serde support
//!
//! Every field has a default so partial JSON configurations deserialize
//! cleanly; an empty object yields the stock demo portfolio parameters.

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::model::Project;

fn default_investment_amount() -> f64 {
    1_000_000.0
}

fn default_liquidity() -> f64 {
    10_000.0
}

fn default_num_runs() -> usize {
    10_000
}

fn default_num_years() -> usize {
    10
}

fn default_volatility() -> f64 {
    0.01
}

/// Options controlling one simulation batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationOptions {
    // === Portfolio ===
    /// Portfolio value at the start of the simulation
    #[serde(default = "default_investment_amount")]
    pub investment_amount: f64,
    /// Reserve that may cover a shortfall before a project is at risk
    #[serde(default = "default_liquidity")]
    pub liquidity: f64,

    // === Simulation ===
    /// Number of Monte Carlo trajectories
    #[serde(default = "default_num_runs")]
    pub num_runs: usize,
    /// Horizon in years; extended automatically if a project starts later
    #[serde(default = "default_num_years")]
    pub num_years: usize,
    /// Expected yearly performance, e.g. `0.034` for 3.4%
    #[serde(default)]
    pub performance: f64,
    /// Standard deviation of the yearly performance
    #[serde(default = "default_volatility")]
    pub volatility: f64,
    /// Seed for reproducible runs; drawn from entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    // === Projects ===
    /// Planned projects in submission order
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            investment_amount: default_investment_amount(),
            liquidity: default_liquidity(),
            num_runs: default_num_runs(),
            num_years: default_num_years(),
            performance: 0.0,
            volatility: default_volatility(),
            seed: None,
            projects: Vec::new(),
        }
    }
}

impl SimulationOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check all numeric fields before a run starts.
    ///
    /// Rejects zero runs or years, non-finite amounts and negative
    /// volatility. Project amounts are checked in submission order, so the
    /// reported index names the first offending project.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.num_runs == 0 {
            return Err(OptionsError::ZeroRuns);
        }
        if self.num_years == 0 {
            return Err(OptionsError::ZeroYears);
        }
        if !self.investment_amount.is_finite() {
            return Err(OptionsError::InvestmentNotFinite {
                amount: self.investment_amount,
            });
        }
        if !self.liquidity.is_finite() {
            return Err(OptionsError::LiquidityNotFinite {
                amount: self.liquidity,
            });
        }
        if !self.performance.is_finite() {
            return Err(OptionsError::PerformanceNotFinite {
                performance: self.performance,
            });
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(OptionsError::VolatilityInvalid {
                volatility: self.volatility,
            });
        }
        for (index, project) in self.projects.iter().enumerate() {
            if !project.total_amount.is_finite() || project.total_amount < 0.0 {
                return Err(OptionsError::ProjectAmountInvalid {
                    index,
                    amount: project.total_amount,
                });
            }
        }
        Ok(())
    }

    /// Horizon actually simulated: the configured number of years, extended
    /// to reach the latest project start year.
    #[must_use]
    pub fn effective_num_years(&self) -> usize {
        self.projects
            .iter()
            .map(|project| project.start_year)
            .fold(self.num_years, usize::max)
    }
}
