//! Algorithm implementations for the rolling-quarter pipeline
//!
//! This module contains the stages between a parsed case table and the
//! final quarter summaries: date derivation, quarter generation and
//! assignment, and per-quarter aggregation.

pub mod dating;
pub mod quarters;
pub mod summary;
