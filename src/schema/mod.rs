//! Module for checking the input table against the fixed column schema.

use crate::error::{Result, StrokeReadyError};

/// Column holding the calendar year of the case
pub const COL_YEAR: &str = "year";
/// Column holding the 1-based calendar month of the case
pub const COL_MONTH: &str = "month";
/// Column holding the case identifier
pub const COL_CASE: &str = "case";
/// Door to doctor contact, in minutes
pub const COL_DOOR_TO_DOCTOR: &str = "Door to Dr Contact";
/// Door to CT, in minutes
pub const COL_DOOR_TO_CT: &str = "Door to CT";
/// CT end to read, in minutes
pub const COL_CT_END_TO_READ: &str = "CT End to Read";
/// CBC order to result, in minutes
pub const COL_CBC_ORDER_TO_RESULT: &str = "CBC order to Result";
/// INR order to result, in minutes
pub const COL_INR_ORDER_TO_RESULT: &str = "INR order to result";
/// Door to needle, in minutes
pub const COL_DOOR_TO_NEEDLE: &str = "Door to Needle";
/// tPA order to tPA delivered, in minutes
pub const COL_TPA_ORDER_TO_DELIVERY: &str = "tPA order to tPA delivered time";

/// The exact, ordered header every input table must carry
pub const EXPECTED_HEADER: [&str; 10] = [
    COL_YEAR,
    COL_MONTH,
    COL_CASE,
    COL_DOOR_TO_DOCTOR,
    COL_DOOR_TO_CT,
    COL_CT_END_TO_READ,
    COL_CBC_ORDER_TO_RESULT,
    COL_INR_ORDER_TO_RESULT,
    COL_DOOR_TO_NEEDLE,
    COL_TPA_ORDER_TO_DELIVERY,
];

/// A single difference between a found header and the expected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderIssue {
    /// The column at `position` has the wrong name
    Mismatch {
        position: usize,
        expected: String,
        found: String,
    },
    /// An expected column is absent at the end of the header
    Missing { position: usize, expected: String },
    /// The header carries columns past the expected end
    Unexpected { position: usize, found: String },
}

impl std::fmt::Display for HeaderIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mismatch {
                position,
                expected,
                found,
            } => write!(f, "column {position}: expected '{expected}', found '{found}'"),
            Self::Missing { position, expected } => {
                write!(f, "column {position}: missing '{expected}'")
            }
            Self::Unexpected { position, found } => {
                write!(f, "column {position}: unexpected '{found}'")
            }
        }
    }
}

/// Returns `true` only when `columns` equals the expected header exactly,
/// element by element, in order and with identical case.
#[must_use]
pub fn validate_header<S: AsRef<str>>(columns: &[S]) -> bool {
    columns.len() == EXPECTED_HEADER.len()
        && columns
            .iter()
            .zip(EXPECTED_HEADER)
            .all(|(found, expected)| found.as_ref() == expected)
}

/// List every position where `columns` departs from the expected header.
///
/// An empty result means the header is valid.
#[must_use]
pub fn header_issues<S: AsRef<str>>(columns: &[S]) -> Vec<HeaderIssue> {
    let len = columns.len().max(EXPECTED_HEADER.len());
    (0..len)
        .filter_map(|position| {
            match (columns.get(position), EXPECTED_HEADER.get(position)) {
                (Some(found), Some(expected)) if found.as_ref() != *expected => {
                    Some(HeaderIssue::Mismatch {
                        position,
                        expected: (*expected).to_string(),
                        found: found.as_ref().to_string(),
                    })
                }
                (None, Some(expected)) => Some(HeaderIssue::Missing {
                    position,
                    expected: (*expected).to_string(),
                }),
                (Some(found), None) => Some(HeaderIssue::Unexpected {
                    position,
                    found: found.as_ref().to_string(),
                }),
                _ => None,
            }
        })
        .collect()
}

/// Fail with `InvalidSchema` unless `columns` is exactly the expected header
pub fn check_header(columns: &[String]) -> Result<()> {
    if validate_header(columns) {
        return Ok(());
    }

    for issue in header_issues(columns) {
        log::debug!("Header issue: {issue}");
    }
    Err(StrokeReadyError::invalid_schema(columns))
}
