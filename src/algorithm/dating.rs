//! Row date derivation
//!
//! Turns parsed cases into dated cases. A case's date is the first day of
//! its year/month; rows whose year or month cannot form a date are rejected
//! or skipped according to [`InvalidDatePolicy`].

use chrono::NaiveDate;

use crate::config::InvalidDatePolicy;
use crate::error::{Result, StrokeReadyError};
use crate::models::case::{CaseRecord, DatedCase};
use crate::utils::{first_day_of, log_warning};

/// First day of the case's month, or `None` if year/month are unusable
#[must_use]
pub fn case_date(record: &CaseRecord) -> Option<NaiveDate> {
    first_day_of(record.year?, record.month?)
}

/// Derive the date and date key for a single case
pub fn derive_date(record: CaseRecord) -> Result<DatedCase> {
    match case_date(&record) {
        Some(date) => {
            let date_key = record.date_key();
            Ok(DatedCase {
                record,
                date,
                date_key,
            })
        }
        None => Err(StrokeReadyError::InvalidDate {
            row: record.row,
            year: record.year_text,
            month: record.month_text,
        }),
    }
}

/// Derive dates for every case, applying `policy` to undatable rows
pub fn date_cases(records: Vec<CaseRecord>, policy: InvalidDatePolicy) -> Result<Vec<DatedCase>> {
    let mut dated = Vec::with_capacity(records.len());

    for record in records {
        match derive_date(record) {
            Ok(case) => dated.push(case),
            Err(StrokeReadyError::InvalidDate { row, year, month })
                if policy == InvalidDatePolicy::Skip =>
            {
                log_warning(
                    &format!("Skipping case with invalid date: year '{year}', month '{month}'"),
                    Some(row),
                );
            }
            Err(e) => return Err(e),
        }
    }

    Ok(dated)
}
