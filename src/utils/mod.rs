//! Utility functions shared by the pipeline stages

pub mod dates;
pub mod logging;

pub use dates::{first_day_of, last_day_of_month, month_abbrev, shift_month, year_month_label};
pub use logging::{log_stage_complete, log_stage_start, log_warning};
