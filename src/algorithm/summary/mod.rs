//! Per-quarter summaries
//!
//! This module groups quartered cases and computes their median timings.

pub mod statistics;
pub mod summarize;

// Re-export commonly used items
pub use statistics::{median, metric_median};
pub use summarize::{
    QuarterGroup, group_by_quarter, quarter_label, summarize, summarize_group, summarize_groups,
};
