//! Capital projects competing for portfolio funds

use serde::{Deserialize, Serialize};

/// A planned capital project that withdraws its full amount from the
/// portfolio at the start of its year.
///
/// Years are relative to the start of the simulation, so `start_year: 0`
/// withdraws immediately and `start_year: 5` withdraws five years in.
/// Two projects may share a year; funds are then reserved in the order
/// the projects were submitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Year the project starts, relative to the simulation start
    pub start_year: usize,
    /// Total amount withdrawn when the project starts
    pub total_amount: f64,
}

impl Project {
    #[must_use]
    pub fn new(start_year: usize, total_amount: f64) -> Self {
        Self {
            start_year,
            total_amount,
        }
    }
}
