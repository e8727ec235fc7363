//! Integration tests for the funding simulation engine
//!
//! Tests are organized by topic:
//! - `cashflow` - Cash flow schedule and no-interest reference line
//! - `simulation` - Trajectory mechanics, rounding and determinism
//! - `classify` - Funding groups, buckets and summary statistics
//! - `engine` - End-to-end runs, ordering and validation
//! - `parallel` - Parallel and chunked runs matching sequential ones
//! - `serialization` - Value types crossing a worker boundary as JSON

mod parallel;
