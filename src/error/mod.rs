//! Error handling for the rolling-quarter pipeline.

use chrono::NaiveDate;

use crate::schema::EXPECTED_HEADER;

/// Specialized error type for the stroke timing pipeline
#[derive(Debug, thiserror::Error)]
pub enum StrokeReadyError {
    /// The parsed header does not match the fixed column schema
    #[error("Headers did not match expected:\n{}", render_expected(.expected))]
    InvalidSchema {
        /// The schema the input was required to have
        expected: Vec<String>,
        /// The header that was actually found
        found: Vec<String>,
    },

    /// No data rows were available to summarize
    #[error("Dataset contains no usable data rows")]
    EmptyDataset,

    /// A dated row fell outside every generated quarter
    #[error("Row {row} dated {date} was not covered by any rolling quarter")]
    UnassignedQuarter {
        /// 1-based data row number
        row: usize,
        /// The row's derived date
        date: NaiveDate,
    },

    /// Year and month could not be combined into a calendar date
    #[error("Row {row} has an invalid date: year '{year}', month '{month}'")]
    InvalidDate {
        /// 1-based data row number
        row: usize,
        /// Raw year text
        year: String,
        /// Raw month text
        month: String,
    },

    /// A data row has a different number of fields than the header
    #[error("Row {row} has {found} fields, expected {expected}")]
    MalformedRow {
        /// 1-based data row number
        row: usize,
        /// Field count of the header
        expected: usize,
        /// Field count of the row
        found: usize,
    },

    /// Delimited-text parse failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Report serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StrokeReadyError {
    /// Create a schema mismatch error carrying the expected header
    #[must_use]
    pub fn invalid_schema(found: &[String]) -> Self {
        Self::InvalidSchema {
            expected: EXPECTED_HEADER.iter().map(|s| (*s).to_string()).collect(),
            found: found.to_vec(),
        }
    }

    /// Create an error for a row no quarter could hold
    #[must_use]
    pub const fn unassigned_quarter(row: usize, date: NaiveDate) -> Self {
        Self::UnassignedQuarter { row, date }
    }
}

fn render_expected(expected: &[String]) -> String {
    serde_json::to_string(expected).unwrap_or_else(|_| expected.join(","))
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, StrokeReadyError>;
