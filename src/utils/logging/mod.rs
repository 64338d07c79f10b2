//! Logging utilities for pipeline progress
//!
//! This module provides standardized logging for the pipeline stages.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_stage_complete, log_stage_start, log_warning};
