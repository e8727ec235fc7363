//! Core data types for the funding simulation

mod environment;
mod project;
mod results;

pub use environment::Environment;
pub use project::Project;
pub use results::{Bucket, FundingGroup, GroupSummary, ProjectResult, SubBucket, ValueBand};
