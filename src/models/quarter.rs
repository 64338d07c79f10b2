//! Rolling quarter models
//!
//! [`QuarterInterval`] is a three-month window anchored at the most recent
//! observed month; [`QuarterSummary`] is the per-quarter record handed to
//! the chart renderer.

use chrono::NaiveDate;
use serde::Serialize;

/// A contiguous three-month window.
///
/// `start` is the first day of the first month and `end` the last day of the
/// third month, both inclusive. Index 0 is the most recent quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuarterInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub index: usize,
}

impl QuarterInterval {
    /// Check if this quarter contains the given date
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Median timings and display labels for one rolling quarter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuarterSummary {
    /// Quarter index, 0 being the most recent
    pub qtr_id: usize,
    /// First month of the quarter, e.g. `2021 Jan`
    pub qtr_begin: String,
    /// Last month of the quarter, e.g. `2021 Mar`
    pub qtr_end: String,
    /// Chart axis label, e.g. `Jan-Mar\n2021`
    pub qtr_label: String,
    /// Median door to doctor contact
    pub med_d2dr: Option<f64>,
    /// Median door to CT
    pub med_d2ct: Option<f64>,
    /// Median door to needle
    pub med_d2rx: Option<f64>,
}
