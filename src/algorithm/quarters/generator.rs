//! Rolling quarter generator
//!
//! Builds the sequence of quarters covering every observed date. Quarter 0
//! ends on the last day of the latest observed month; each following quarter
//! ends the month before its predecessor starts, so quarters never overlap
//! and never leave a gap.

use chrono::{Datelike, NaiveDate};
use itertools::{Itertools, MinMaxResult};

use crate::error::{Result, StrokeReadyError};
use crate::models::quarter::QuarterInterval;
use crate::utils::{first_day_of, last_day_of_month, shift_month};

/// Calendar months in one rolling quarter
pub const MONTHS_PER_QUARTER: i32 = 3;

/// Build the quarter `index` steps back from the quarter ending in
/// `anchor`'s month.
///
/// Returns `None` only when the computed months fall outside chrono's
/// supported date range.
#[must_use]
pub fn quarter_ending_at(anchor: NaiveDate, index: usize) -> Option<QuarterInterval> {
    let steps = i32::try_from(index).ok()?.checked_mul(MONTHS_PER_QUARTER)?;

    let (end_year, end_month) = shift_month(anchor.year(), anchor.month(), -steps);
    let (start_year, start_month) = shift_month(end_year, end_month, 1 - MONTHS_PER_QUARTER);

    let start = first_day_of(start_year, start_month)?;
    let end = last_day_of_month(first_day_of(end_year, end_month)?);

    Some(QuarterInterval { start, end, index })
}

/// Generate the rolling quarters covering `dates`, most recent first.
///
/// Quarters are produced until one starts on or before the earliest date;
/// that final quarter is included, so at least one quarter is always
/// returned for a non-empty input.
pub fn generate_quarters(dates: &[NaiveDate]) -> Result<Vec<QuarterInterval>> {
    let (min_date, max_date) = match dates.iter().copied().minmax() {
        MinMaxResult::NoElements => return Err(StrokeReadyError::EmptyDataset),
        MinMaxResult::OneElement(date) => (date, date),
        MinMaxResult::MinMax(min, max) => (min, max),
    };

    let mut quarters = Vec::new();
    for index in 0.. {
        let Some(quarter) = quarter_ending_at(max_date, index) else {
            // Walked off chrono's calendar; everything representable is covered.
            break;
        };
        quarters.push(quarter);
        if quarter.start <= min_date {
            break;
        }
    }

    log::debug!(
        "Generated {} rolling quarters covering {} to {}",
        quarters.len(),
        min_date,
        max_date
    );
    Ok(quarters)
}
