//! Shared state produced once per run and read by every classification

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::Project;

/// Everything classification needs, computed once per batch.
///
/// Building an environment is the expensive part of a run (it contains the
/// full Monte Carlo value table); classifying an individual project against
/// it is cheap. The type is plain data and serializable so it can cross a
/// worker boundary as a value.
///
/// Both schedule vectors and the value table span `num_years + 1` entries,
/// indexed by year `0..=num_years`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Portfolio value at year zero
    pub investment_amount: f64,
    /// Reserve that may be tapped before a project is considered at risk
    pub liquidity: f64,
    /// Number of simulated trajectories
    pub num_runs: usize,
    /// Simulation horizon; at least the largest project start year
    pub num_years: usize,
    /// Projects in submission order
    pub projects: Vec<Project>,
    /// Indices into `projects` keyed by start year, submission order preserved
    pub projects_by_start_year: FxHashMap<usize, Vec<usize>>,
    /// Net cash flow per year, negative while projects withdraw
    pub cash_flows: Vec<f64>,
    /// Portfolio value per year had the money earned no interest
    pub no_interest_reference_line: Vec<f64>,
    /// Simulated portfolio values, `simulated_values[year][run]`
    pub simulated_values: Vec<Vec<f64>>,
}
