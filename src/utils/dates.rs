//! Calendar helpers for month-resolution dates.
//!
//! All month arithmetic goes through [`shift_month`], which carries and
//! borrows whole years explicitly so that walking backwards across January
//! lands in December of the previous year.

use chrono::{Datelike, NaiveDate};

/// First day of the given year and 1-based month.
///
/// Returns `None` when the month is outside 1-12 or the year is out of
/// chrono's range.
#[must_use]
pub fn first_day_of(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Move a 1-based `(year, month)` pair by `delta` months in either direction.
///
/// The returned month is always in 1-12.
#[must_use]
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    // Count months from year 0 so a single euclidean division normalises both
    // directions.
    let absolute = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(delta);
    let new_year = absolute.div_euclid(12);
    let new_month = absolute.rem_euclid(12) + 1;
    (new_year as i32, new_month as u32)
}

/// Last day of the month containing `date`
#[must_use]
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = shift_month(date.year(), date.month(), 1);
    first_day_of(year, month)
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Three-letter English month name, e.g. `Jan`
#[must_use]
pub fn month_abbrev(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

/// Year followed by abbreviated month, e.g. `2021 Jan`
#[must_use]
pub fn year_month_label(date: NaiveDate) -> String {
    date.format("%Y %b").to_string()
}
