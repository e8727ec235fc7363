//! Classification results for a single project
//!
//! A [`ProjectResult`] condenses the simulated value distribution of one
//! project year into summary statistics, ten display buckets and the share
//! of outcomes per funding group.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Project;

/// How well a simulated portfolio value covers a project's funding need.
///
/// Groups are ordered from fully funded to underwater; classification
/// assigns each value to the first group whose interval contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingGroup {
    /// Value covers the required amount outright
    Green,
    /// Value covers the required amount once the liquidity reserve is tapped
    Yellow,
    /// Value trails the requirement but still beats an interest-free account
    Gray,
    /// Value fell below the interest-free reference
    Red,
}

impl FundingGroup {
    /// All groups, best to worst
    pub const ALL: [FundingGroup; 4] = [
        FundingGroup::Green,
        FundingGroup::Yellow,
        FundingGroup::Gray,
        FundingGroup::Red,
    ];
}

impl fmt::Display for FundingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FundingGroup::Green => "green",
            FundingGroup::Yellow => "yellow",
            FundingGroup::Gray => "gray",
            FundingGroup::Red => "red",
        };
        write!(f, "{name}")
    }
}

/// Closed value range `[min, max]` over simulated outcomes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueBand {
    pub min: f64,
    pub max: f64,
}

/// Value range of one funding group inside a single bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubBucket {
    pub group: FundingGroup,
    pub min: f64,
    pub max: f64,
}

/// One decile-sized slice of the sorted outcome distribution.
///
/// `sub_buckets` lists only the groups that actually occur in the slice,
/// ordered best to worst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub min: f64,
    pub max: f64,
    pub sub_buckets: Vec<SubBucket>,
}

/// Share of all simulated outcomes that fell into one funding group.
///
/// `from` is inclusive and `to` exclusive; `None` means the interval is
/// unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub group: FundingGroup,
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub percentage: f64,
}

/// Full classification of one project against the simulated distribution
/// of portfolio values in its start year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectResult {
    /// The project this result describes
    pub project: Project,
    /// Smallest simulated value in the project's start year
    pub min: f64,
    /// Largest simulated value in the project's start year
    pub max: f64,
    /// Median simulated value
    pub median: f64,
    /// Central band holding roughly two thirds of all outcomes
    pub two_third: ValueBand,
    /// Sorted outcome distribution cut into roughly ten buckets
    pub buckets: Vec<Bucket>,
    /// Outcome share per funding group, best group first, absent groups omitted
    pub groups: Vec<GroupSummary>,
}

impl ProjectResult {
    /// Share of outcomes in the given group, `0.0` when the group is absent
    #[must_use]
    pub fn percentage_for(&self, group: FundingGroup) -> f64 {
        self.groups
            .iter()
            .find(|summary| summary.group == group)
            .map_or(0.0, |summary| summary.percentage)
    }
}
