//! Batch orchestration: build the environment once, classify every project
//!
//! A run validates the options, derives the horizon, simulates the value
//! table and then classifies each project against it. Classification
//! failures are isolated per project; one bad project never discards the
//! results of the others.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use rustc_hash::FxHashMap;

use crate::cashflow::build_schedule;
use crate::classify::classify_project;
use crate::config::SimulationOptions;
use crate::error::{ClassifyError, EngineError};
use crate::model::{Environment, Project, ProjectResult};
use crate::random::RandomStream;
use crate::simulation::simulate_outcomes;

/// Outcome of one project's classification within a batch
pub type ProjectOutcome = Result<ProjectResult, ClassifyError>;

/// Smallest number of projects a partitioned worker task receives
pub const MIN_PROJECTS_PER_TASK: usize = 2;

/// Progress tracking for a batch run
///
/// Cloning shares the underlying counters, so one handle can drive a run
/// while another observes it or cancels it from a different thread.
#[derive(Debug, Clone)]
pub struct RunProgress {
    completed: Arc<AtomicUsize>,
    total: Arc<AtomicUsize>,
    cancelled: Arc<AtomicBool>,
}

impl RunProgress {
    /// Create a new progress tracker expecting `total` classifications
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            completed: Arc::new(AtomicUsize::new(0)),
            total: Arc::new(AtomicUsize::new(total)),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Number of classifications completed so far
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    /// Total number of classifications expected
    #[must_use]
    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    /// Record one completed classification
    pub fn increment(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    /// Reset the counters for a new run expecting `total` classifications.
    /// A pending cancellation stays in effect.
    pub fn reset(&self, total: usize) {
        self.completed.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
    }

    /// Ask the run to stop before the next classification
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl Default for RunProgress {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Validate options, simulate the value table and assemble the shared
/// environment every classification reads from.
///
/// The horizon is derived from the options and the project list, so a
/// project starting past `options.num_years` extends the simulation
/// rather than falling off the schedule.
pub fn build_environment(
    options: &SimulationOptions,
    random: &mut RandomStream,
) -> Result<Environment, EngineError> {
    options.validate()?;

    let num_years = options.effective_num_years();
    let schedule = build_schedule(&options.projects, options.investment_amount, num_years)?;
    let simulated_values = simulate_outcomes(&schedule.cash_flows, options, num_years, random)?;

    Ok(Environment {
        investment_amount: options.investment_amount,
        liquidity: options.liquidity,
        num_runs: options.num_runs,
        num_years,
        projects: options.projects.clone(),
        projects_by_start_year: group_by_start_year(&options.projects),
        cash_flows: schedule.cash_flows,
        no_interest_reference_line: schedule.no_interest_reference_line,
        simulated_values,
    })
}

fn group_by_start_year(projects: &[Project]) -> FxHashMap<usize, Vec<usize>> {
    let mut by_year: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
    for (index, project) in projects.iter().enumerate() {
        by_year.entry(project.start_year).or_default().push(index);
    }
    by_year
}

/// Run one batch: simulate once, then classify every project.
///
/// Outcomes come back in submission order, one per project, regardless of
/// start years.
pub fn run(
    options: &SimulationOptions,
    random: &mut RandomStream,
) -> Result<Vec<ProjectOutcome>, EngineError> {
    let environment = build_environment(options, random)?;

    let outcomes: Vec<ProjectOutcome> = (0..environment.projects.len())
        .map(|index| classify_project(&environment, index))
        .collect();

    Ok(outcomes)
}

/// Like [`run`], reporting per-project progress and honoring cancellation
/// between classifications.
pub fn run_with_progress(
    options: &SimulationOptions,
    random: &mut RandomStream,
    progress: &RunProgress,
) -> Result<Vec<ProjectOutcome>, EngineError> {
    let environment = build_environment(options, random)?;
    progress.reset(environment.projects.len());

    let mut outcomes = Vec::with_capacity(environment.projects.len());
    for index in 0..environment.projects.len() {
        if progress.is_cancelled() {
            return Err(EngineError::Cancelled);
        }
        outcomes.push(classify_project(&environment, index));
        progress.increment();
    }

    Ok(outcomes)
}

/// Like [`run`], classifying projects across threads.
///
/// The environment is still built once up front from the single random
/// stream, so a seeded parallel run returns exactly the outcomes of the
/// sequential one, in the same submission order.
pub fn run_parallel(
    options: &SimulationOptions,
    random: &mut RandomStream,
) -> Result<Vec<ProjectOutcome>, EngineError> {
    let environment = build_environment(options, random)?;

    #[cfg(feature = "parallel")]
    let outcomes: Vec<ProjectOutcome> = (0..environment.projects.len())
        .into_par_iter()
        .map(|index| classify_project(&environment, index))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<ProjectOutcome> = (0..environment.projects.len())
        .map(|index| classify_project(&environment, index))
        .collect();

    Ok(outcomes)
}

/// Number of projects each task of a partitioned run should classify:
/// an even split over at most `max_tasks` tasks, never below
/// [`MIN_PROJECTS_PER_TASK`] since tiny slices cost more in dispatch than
/// they save in parallelism.
#[must_use]
pub fn values_per_task(num_projects: usize, max_tasks: usize) -> usize {
    if num_projects == 0 || max_tasks == 0 {
        return MIN_PROJECTS_PER_TASK;
    }
    num_projects.div_ceil(max_tasks).max(MIN_PROJECTS_PER_TASK)
}

/// Classify one task's slice of the project list.
///
/// Rebuilds the environment from `options.seed`, so every task of a
/// partitioned run works against the identical value table and the
/// concatenated slices match a single [`run`]. Tasks past the end of the
/// project list return an empty vector.
pub fn classify_slice(
    options: &SimulationOptions,
    task_index: usize,
    values_per_task: usize,
) -> Result<Vec<ProjectOutcome>, EngineError> {
    let mut random = RandomStream::for_seed(options.seed);
    let environment = build_environment(options, &mut random)?;

    let num_projects = environment.projects.len();
    let start = task_index.saturating_mul(values_per_task).min(num_projects);
    let end = start.saturating_add(values_per_task).min(num_projects);

    let outcomes: Vec<ProjectOutcome> = (start..end)
        .map(|index| classify_project(&environment, index))
        .collect();

    Ok(outcomes)
}
