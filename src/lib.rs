//! A Rust library for summarizing stroke door-to-treatment timings into
//! rolling quarters.
//!
//! The pipeline takes a comma-separated case table, validates its header,
//! dates each case, buckets cases into three-month quarters anchored at the
//! most recent month, and returns median timings for the latest quarters.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{InvalidDatePolicy, NeedleMetric, PipelineConfig};
pub use error::{Result, StrokeReadyError};
pub use models::{CaseRecord, DatedCase, Metric, QuarterInterval, QuarterSummary, QuarteredCase};

// Pipeline entry points
pub use pipeline::{PipelineStage, process_data, process_data_with_config};

// Individual stages
pub use algorithm::dating::{date_cases, derive_date};
pub use algorithm::quarters::{assign_quarter, assign_quarters, generate_quarters};
pub use algorithm::summary::{median, summarize};
pub use schema::{EXPECTED_HEADER, check_header, validate_header};

// Output helpers
pub use report::{chart_order, tabulate, to_json};
