//! Module for reading comma-separated case tables.
//!
//! Reading is split in two so the header can be validated before any data
//! row is converted: [`read_table`] splits the text into a header and raw
//! records, [`to_case_records`] converts the records into [`CaseRecord`]s.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{Result, StrokeReadyError};
use crate::models::case::{CaseRecord, Metric};

/// Column positions fixed by the expected header
const YEAR_IDX: usize = 0;
const MONTH_IDX: usize = 1;
const CASE_IDX: usize = 2;
const FIRST_METRIC_IDX: usize = 3;

/// A delimited table split into its header and data records
#[derive(Debug, Clone)]
pub struct ParsedTable {
    /// Column names exactly as they appear in the header row
    pub headers: Vec<String>,
    /// Data rows, header excluded
    pub records: Vec<StringRecord>,
}

impl ParsedTable {
    /// Number of data rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no data rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Split comma-separated text into a header and raw records.
///
/// Header names are kept verbatim; data fields are trimmed. Field counts are
/// not checked here so that a wrong header is reported as such rather than
/// as ragged rows; see [`check_row_lengths`].
pub fn read_table(text: &str) -> Result<ParsedTable> {
    if text.trim().is_empty() {
        return Ok(ParsedTable {
            headers: Vec::new(),
            records: Vec::new(),
        });
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Fields)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.iter().map(str::to_string).collect();
    let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(ParsedTable { headers, records })
}

/// Fail with `MalformedRow` on the first record whose field count differs
/// from the header's
pub fn check_row_lengths(table: &ParsedTable) -> Result<()> {
    let expected = table.headers.len();
    match table
        .records
        .iter()
        .position(|record| record.len() != expected)
    {
        Some(idx) => Err(StrokeReadyError::MalformedRow {
            row: idx + 1,
            expected,
            found: table.records[idx].len(),
        }),
        None => Ok(()),
    }
}

/// Read a whole file into a string
pub fn read_text_file(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Parse a duration field.
///
/// Blank, non-numeric and non-finite values are treated as missing.
#[must_use]
pub fn parse_metric(field: &str) -> Option<f64> {
    let field = field.trim();
    if field.is_empty() {
        return None;
    }
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Convert one raw record into a case.
///
/// `row` is the 1-based data row number used in diagnostics.
#[must_use]
pub fn to_case_record(row: usize, record: &StringRecord) -> CaseRecord {
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();

    let mut case = CaseRecord {
        row,
        year_text: field(YEAR_IDX).to_string(),
        month_text: field(MONTH_IDX).to_string(),
        year: field(YEAR_IDX).parse().ok(),
        month: field(MONTH_IDX).parse().ok(),
        case_id: field(CASE_IDX).to_string(),
        ..Default::default()
    };

    for (offset, metric) in Metric::ALL.into_iter().enumerate() {
        *case.metric_mut(metric) = parse_metric(field(FIRST_METRIC_IDX + offset));
    }

    case
}

/// Convert every record of a validated table into cases
#[must_use]
pub fn to_case_records(table: &ParsedTable) -> Vec<CaseRecord> {
    table
        .records
        .iter()
        .enumerate()
        .map(|(idx, record)| to_case_record(idx + 1, record))
        .collect()
}
