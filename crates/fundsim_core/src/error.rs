//! Error types for the funding simulation

use std::fmt;

/// Errors raised while validating simulation options
#[derive(Debug, Clone)]
pub enum OptionsError {
    /// The number of simulation runs is zero
    ZeroRuns,
    /// The simulation horizon is zero years
    ZeroYears,
    /// The initial investment amount is NaN or infinite
    InvestmentNotFinite { amount: f64 },
    /// The liquidity reserve is NaN or infinite
    LiquidityNotFinite { amount: f64 },
    /// The expected yearly performance is NaN or infinite
    PerformanceNotFinite { performance: f64 },
    /// The yearly volatility is negative, NaN or infinite
    VolatilityInvalid { volatility: f64 },
    /// A project's total amount is negative, NaN or infinite
    ProjectAmountInvalid { index: usize, amount: f64 },
    /// A project starts after the simulation horizon ends
    ProjectBeyondHorizon {
        index: usize,
        start_year: usize,
        num_years: usize,
    },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::ZeroRuns => {
                write!(f, "number of simulation runs must be at least 1")
            }
            OptionsError::ZeroYears => {
                write!(f, "simulation horizon must be at least 1 year")
            }
            OptionsError::InvestmentNotFinite { amount } => {
                write!(f, "investment amount {amount} is not a finite number")
            }
            OptionsError::LiquidityNotFinite { amount } => {
                write!(f, "liquidity reserve {amount} is not a finite number")
            }
            OptionsError::PerformanceNotFinite { performance } => {
                write!(f, "expected performance {performance} is not a finite number")
            }
            OptionsError::VolatilityInvalid { volatility } => {
                write!(f, "volatility {volatility} must be finite and non-negative")
            }
            OptionsError::ProjectAmountInvalid { index, amount } => {
                write!(
                    f,
                    "project {index} has amount {amount}, expected a finite non-negative number"
                )
            }
            OptionsError::ProjectBeyondHorizon {
                index,
                start_year,
                num_years,
            } => {
                write!(
                    f,
                    "project {index} starts in year {start_year} but the horizon ends at year {num_years}"
                )
            }
        }
    }
}

impl std::error::Error for OptionsError {}

/// Errors raised while simulating portfolio trajectories
#[derive(Debug, Clone)]
pub enum SimulationError {
    /// The yearly growth distribution could not be constructed
    InvalidDistribution {
        mean: f64,
        std_dev: f64,
        reason: &'static str,
    },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidDistribution {
                mean,
                std_dev,
                reason,
            } => {
                write!(
                    f,
                    "invalid growth distribution (mean {mean}, std dev {std_dev}): {reason}"
                )
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Errors raised while classifying a single project
#[derive(Debug, Clone)]
pub enum ClassifyError {
    /// No simulated values exist for the project's start year
    EmptyDistribution { year: usize },
    /// The project's start year lies outside the simulated horizon
    YearOutOfRange { start_year: usize, num_years: usize },
    /// The project index does not exist in the environment
    UnknownProject { project_index: usize },
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::EmptyDistribution { year } => {
                write!(f, "no simulated values for year {year}")
            }
            ClassifyError::YearOutOfRange {
                start_year,
                num_years,
            } => {
                write!(
                    f,
                    "start year {start_year} lies outside the simulated horizon of {num_years} years"
                )
            }
            ClassifyError::UnknownProject { project_index } => {
                write!(f, "project index {project_index} not found in environment")
            }
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Top-level error for a batch run
#[derive(Debug, Clone)]
pub enum EngineError {
    /// The options failed validation
    Options(OptionsError),
    /// Trajectory simulation failed
    Simulation(SimulationError),
    /// The run was cancelled before it finished
    Cancelled,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Options(err) => write!(f, "invalid options: {err}"),
            EngineError::Simulation(err) => write!(f, "simulation failed: {err}"),
            EngineError::Cancelled => write!(f, "run cancelled"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Options(err) => Some(err),
            EngineError::Simulation(err) => Some(err),
            EngineError::Cancelled => None,
        }
    }
}

impl From<OptionsError> for EngineError {
    fn from(err: OptionsError) -> Self {
        EngineError::Options(err)
    }
}

impl From<SimulationError> for EngineError {
    fn from(err: SimulationError) -> Self {
        EngineError::Simulation(err)
    }
}
