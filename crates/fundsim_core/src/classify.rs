//! Classification of projects against simulated portfolio values
//!
//! For each project the simulated values of its start year are sorted and
//! condensed: funding group shares, ten distribution buckets with group
//! sub-ranges, the median and a central two-thirds band.

use crate::error::ClassifyError;
use crate::model::{
    Bucket, Environment, FundingGroup, GroupSummary, Project, ProjectResult, SubBucket, ValueBand,
};

/// Target number of buckets the sorted distribution is cut into
pub const NUMBER_OF_BUCKETS: usize = 10;

/// The three thresholds that cut the value line into the four funding
/// groups of one project year.
#[derive(Debug, Clone, Copy)]
pub struct FundingBands {
    required_amount: f64,
    with_reserve: f64,
    no_interest_reference: f64,
}

impl FundingBands {
    /// `required_amount` is the project's own amount plus every earlier
    /// submitted project sharing its start year; the liquidity reserve
    /// lowers the threshold at which funding is still reachable.
    #[must_use]
    pub fn new(required_amount: f64, no_interest_reference: f64, liquidity: f64) -> Self {
        Self {
            required_amount,
            with_reserve: required_amount - liquidity,
            no_interest_reference,
        }
    }

    /// Classify one portfolio value. The first matching group wins, so
    /// every value lands in exactly one group even when thresholds cross.
    #[must_use]
    pub fn group_for(&self, value: f64) -> FundingGroup {
        if value >= self.required_amount {
            FundingGroup::Green
        } else if value >= self.with_reserve {
            FundingGroup::Yellow
        } else if value >= self.no_interest_reference {
            FundingGroup::Gray
        } else {
            FundingGroup::Red
        }
    }

    /// Interval of a group, inclusive `from` and exclusive `to`
    fn bounds(&self, group: FundingGroup) -> (Option<f64>, Option<f64>) {
        match group {
            FundingGroup::Green => (Some(self.required_amount), None),
            FundingGroup::Yellow => (Some(self.with_reserve), Some(self.required_amount)),
            FundingGroup::Gray => (Some(self.no_interest_reference), Some(self.with_reserve)),
            FundingGroup::Red => (None, Some(self.no_interest_reference)),
        }
    }
}

/// Classify one project of the environment.
///
/// Reads the simulated values of the project's start year, never mutating
/// the environment, so projects can be classified in any order or in
/// parallel. Classifying the same project twice yields identical results.
pub fn classify_project(
    environment: &Environment,
    project_index: usize,
) -> Result<ProjectResult, ClassifyError> {
    let project = environment
        .projects
        .get(project_index)
        .copied()
        .ok_or(ClassifyError::UnknownProject { project_index })?;

    let start_year = project.start_year;
    let no_interest_reference = environment
        .no_interest_reference_line
        .get(start_year)
        .copied()
        .ok_or(ClassifyError::YearOutOfRange {
            start_year,
            num_years: environment.num_years,
        })?;
    let values = environment
        .simulated_values
        .get(start_year)
        .ok_or(ClassifyError::YearOutOfRange {
            start_year,
            num_years: environment.num_years,
        })?;
    if values.is_empty() {
        return Err(ClassifyError::EmptyDistribution { year: start_year });
    }

    let mut sorted = values.clone();
    sorted.sort_unstable_by(f64::total_cmp);

    let bands = FundingBands::new(
        required_amount(environment, project_index, &project),
        no_interest_reference,
        environment.liquidity,
    );
    let (buckets, counts) = compute_buckets(&sorted, &bands);

    Ok(ProjectResult {
        project,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        median: median_of(&sorted),
        two_third: two_third_band(&sorted),
        buckets,
        groups: group_summaries(&bands, &counts, sorted.len()),
    })
}

/// Amount the portfolio must hold in the project's start year: the
/// project's own amount plus every project with the same start year that
/// was submitted before it. Projects submitted later never raise the
/// requirement, even with identical amounts.
fn required_amount(environment: &Environment, project_index: usize, project: &Project) -> f64 {
    let mut amount = project.total_amount;

    if let Some(same_year) = environment.projects_by_start_year.get(&project.start_year) {
        for &other_index in same_year {
            if other_index == project_index {
                break;
            }
            amount += environment.projects[other_index].total_amount;
        }
    }

    amount
}

fn bucket_size(num_values: usize) -> usize {
    let size = (num_values as f64 / NUMBER_OF_BUCKETS as f64).round() as usize;
    size.max(1)
}

/// Cut the sorted values into roughly [`NUMBER_OF_BUCKETS`] buckets and
/// tally the funding group of every value along the way.
fn compute_buckets(sorted: &[f64], bands: &FundingBands) -> (Vec<Bucket>, [usize; 4]) {
    let size = bucket_size(sorted.len());
    let mut counts = [0usize; 4];
    let mut buckets = Vec::with_capacity(sorted.len().div_ceil(size));

    // chunking keeps every value in exactly one bucket; a remainder forms
    // one short bucket at the top end
    for chunk in sorted.chunks(size) {
        buckets.push(compute_bucket(chunk, bands, &mut counts));
    }

    (buckets, counts)
}

fn compute_bucket(chunk: &[f64], bands: &FundingBands, counts: &mut [usize; 4]) -> Bucket {
    let mut ranges: [Option<(f64, f64)>; 4] = [None; 4];
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for &value in chunk {
        min = min.min(value);
        max = max.max(value);

        let group = bands.group_for(value);
        counts[group as usize] += 1;

        ranges[group as usize] = match ranges[group as usize] {
            Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
            None => Some((value, value)),
        };
    }

    let sub_buckets = FundingGroup::ALL
        .iter()
        .zip(&ranges)
        .filter_map(|(&group, &range)| range.map(|(min, max)| SubBucket { group, min, max }))
        .collect();

    Bucket {
        min,
        max,
        sub_buckets,
    }
}

/// One summary per funding group that actually occurred, best group first
fn group_summaries(
    bands: &FundingBands,
    counts: &[usize; 4],
    num_values: usize,
) -> Vec<GroupSummary> {
    FundingGroup::ALL
        .iter()
        .filter(|&&group| counts[group as usize] > 0)
        .map(|&group| {
            let (from, to) = bands.bounds(group);
            GroupSummary {
                group,
                from,
                to,
                percentage: counts[group as usize] as f64 / num_values as f64,
            }
        })
        .collect()
}

fn median_of(sorted: &[f64]) -> f64 {
    let half = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[half - 1] + sorted[half]) / 2.0
    } else {
        sorted[half]
    }
}

/// Band holding roughly the central two thirds of the sorted values: one
/// sixth is dropped from each end.
fn two_third_band(sorted: &[f64]) -> ValueBand {
    let one_sixth = (sorted.len() as f64 / 6.0).round() as usize;
    ValueBand {
        min: sorted[one_sixth],
        max: sorted[sorted.len() - 1 - one_sixth],
    }
}
