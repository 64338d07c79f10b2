//! Rolling quarter generation and assignment
//!
//! Quarters are three-month windows anchored at the most recent observed
//! month and walked backwards until the earliest observation is covered.

pub mod assign;
pub mod generator;

// Re-export commonly used items
pub use assign::{assign_quarter, assign_quarters};
pub use generator::{MONTHS_PER_QUARTER, generate_quarters, quarter_ending_at};
