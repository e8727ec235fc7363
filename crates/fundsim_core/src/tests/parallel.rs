//! Tests for parallel and chunked batch runs
//!
//! These tests verify that:
//! - A parallel run returns exactly the sequential outcomes, in order
//! - Chunked tasks concatenate to the sequential outcome list
//! - Tasks past the end of the project list come back empty

use crate::config::SimulationOptions;
use crate::engine::{ProjectOutcome, classify_slice, run, run_parallel, values_per_task};
use crate::model::{Project, ProjectResult};
use crate::random::RandomStream;

fn portfolio_options() -> SimulationOptions {
    SimulationOptions {
        investment_amount: 620_000.0,
        num_runs: 2_000,
        num_years: 15,
        performance: 0.034,
        volatility: 0.0896,
        seed: Some(11),
        // descending start years so ordering mistakes are visible
        projects: (0..8)
            .map(|i| Project::new(15 - i, 5_000.0 + 1_000.0 * i as f64))
            .collect(),
        ..Default::default()
    }
}

fn unwrap_all(outcomes: Vec<ProjectOutcome>) -> Vec<ProjectResult> {
    outcomes
        .into_iter()
        .map(|outcome| outcome.unwrap())
        .collect()
}

#[test]
fn test_parallel_matches_sequential() {
    let options = portfolio_options();

    let mut sequential_random = RandomStream::for_seed(options.seed);
    let sequential = unwrap_all(run(&options, &mut sequential_random).unwrap());

    let mut parallel_random = RandomStream::for_seed(options.seed);
    let parallel = unwrap_all(run_parallel(&options, &mut parallel_random).unwrap());

    assert_eq!(sequential, parallel);
}

#[test]
fn test_parallel_keeps_submission_order() {
    let options = portfolio_options();
    let mut random = RandomStream::for_seed(options.seed);

    let outcomes = unwrap_all(run_parallel(&options, &mut random).unwrap());

    let returned: Vec<Project> = outcomes.iter().map(|result| result.project).collect();
    assert_eq!(returned, options.projects);
}

#[test]
fn test_chunked_tasks_concatenate_to_sequential_run() {
    let options = portfolio_options();
    let chunk = values_per_task(options.projects.len(), 4);
    assert_eq!(chunk, 2);

    let mut collected = Vec::new();
    for task_index in 0.. {
        let outcomes = classify_slice(&options, task_index, chunk).unwrap();
        if outcomes.is_empty() {
            break;
        }
        collected.extend(outcomes);
    }

    let mut random = RandomStream::for_seed(options.seed);
    let sequential = unwrap_all(run(&options, &mut random).unwrap());

    assert_eq!(unwrap_all(collected), sequential);
}

#[test]
fn test_task_past_end_is_empty() {
    let options = portfolio_options();

    let outcomes = classify_slice(&options, 100, 2).unwrap();

    assert!(outcomes.is_empty());
}

#[test]
fn test_final_partial_task_returns_remainder() {
    let mut options = portfolio_options();
    options.projects.push(Project::new(3, 9_999.0));
    assert_eq!(options.projects.len(), 9);

    // slices of four: two full tasks, then a single leftover project
    let remainder = classify_slice(&options, 2, 4).unwrap();

    assert_eq!(remainder.len(), 1);
    assert_eq!(
        remainder[0].as_ref().unwrap().project,
        Project::new(3, 9_999.0)
    );
}
