//! Domain models for the rolling-quarter pipeline
//!
//! This module contains the case records flowing through the pipeline and
//! the quarter types it produces.

pub mod case;
pub mod quarter;

// Re-export commonly used types
pub use case::{CaseRecord, DatedCase, Metric, QuarteredCase};
pub use quarter::{QuarterInterval, QuarterSummary};
