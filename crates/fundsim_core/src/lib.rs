//! Core Monte Carlo library for project funding simulation
//!
//! This crate simulates the yearly value of an invested portfolio that
//! planned capital projects draw from, then classifies each project by how
//! likely the portfolio is to cover it. It supports:
//! - Normally distributed yearly growth with configurable performance and
//!   volatility
//! - Seeded, bit-for-bit reproducible runs from a single random stream
//! - Project withdrawals as yearly cash flows with a no-interest reference
//!   line
//! - Funding group classification (green, yellow, gray, red) per project
//! - Distribution buckets and summary statistics for charting
//! - Sequential, progress-reporting and parallel batch runs

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod cashflow;
pub mod classify;
pub mod engine;
pub mod error;
pub mod random;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::SimulationOptions;
pub use engine::{ProjectOutcome, RunProgress, run, run_parallel, run_with_progress};
pub use model::{FundingGroup, Project, ProjectResult};
pub use random::RandomStream;
