//! The rolling-quarter pipeline.
//!
//! A single linear pass over the input text:
//! `Parsed -> Validated -> Dated -> Quartered -> Grouped -> Summarized`.
//! The only early exits are input-shape errors (header mismatch, no rows),
//! undatable rows under the reject policy, and the internal
//! unassigned-quarter check. No partial output is returned on error.

use std::time::Instant;

use crate::algorithm::dating::date_cases;
use crate::algorithm::quarters::{assign_quarters, generate_quarters};
use crate::algorithm::summary::{group_by_quarter, summarize_groups};
use crate::config::PipelineConfig;
use crate::error::{Result, StrokeReadyError};
use crate::models::case::{CaseRecord, DatedCase, QuarteredCase};
use crate::models::quarter::QuarterSummary;
use crate::reader::{ParsedTable, check_row_lengths, read_table, to_case_records};
use crate::schema::check_header;
use crate::utils::{log_stage_complete, log_stage_start};

/// States of the pipeline, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Parsed,
    Validated,
    Dated,
    Quartered,
    Grouped,
    Summarized,
}

impl PipelineStage {
    /// Stage name used in log output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Parsed => "parsed",
            Self::Validated => "validated",
            Self::Dated => "dated",
            Self::Quartered => "quartered",
            Self::Grouped => "grouped",
            Self::Summarized => "summarized",
        }
    }
}

/// Parse the text into a header and raw records
pub fn parse(text: &str) -> Result<ParsedTable> {
    log_stage_start(PipelineStage::Parsed.name());
    let table = read_table(text)?;
    log_stage_complete(PipelineStage::Parsed.name(), table.len(), None);
    Ok(table)
}

/// Check the header and convert the records into cases.
///
/// Fails with `InvalidSchema` before any row is looked at, with
/// `EmptyDataset` when the table has no data rows, and with `MalformedRow`
/// when a row's field count differs from the header's.
pub fn validate(table: &ParsedTable) -> Result<Vec<CaseRecord>> {
    log_stage_start(PipelineStage::Validated.name());
    check_header(&table.headers)?;
    if table.is_empty() {
        return Err(StrokeReadyError::EmptyDataset);
    }
    check_row_lengths(table)?;
    let records = to_case_records(table);
    log_stage_complete(PipelineStage::Validated.name(), records.len(), None);
    Ok(records)
}

/// Derive a date for every case
pub fn date(records: Vec<CaseRecord>, config: &PipelineConfig) -> Result<Vec<DatedCase>> {
    log_stage_start(PipelineStage::Dated.name());
    let dated = date_cases(records, config.invalid_date_policy)?;
    if dated.is_empty() {
        return Err(StrokeReadyError::EmptyDataset);
    }
    log_stage_complete(PipelineStage::Dated.name(), dated.len(), None);
    Ok(dated)
}

/// Generate the rolling quarters and assign each case to one
pub fn quarter(dated: Vec<DatedCase>) -> Result<Vec<QuarteredCase>> {
    log_stage_start(PipelineStage::Quartered.name());
    let dates: Vec<_> = dated.iter().map(|case| case.date).collect();
    let quarters = generate_quarters(&dates)?;
    let quartered = assign_quarters(dated, &quarters)?;
    log_stage_complete(PipelineStage::Quartered.name(), quarters.len(), None);
    Ok(quartered)
}

/// Run the whole pipeline with the default configuration
pub fn process_data(text: &str) -> Result<Vec<QuarterSummary>> {
    process_data_with_config(text, &PipelineConfig::default())
}

/// Run the whole pipeline
pub fn process_data_with_config(
    text: &str,
    config: &PipelineConfig,
) -> Result<Vec<QuarterSummary>> {
    let start = Instant::now();

    let table = parse(text)?;
    let records = validate(&table)?;
    let dated = date(records, config)?;
    let quartered = quarter(dated)?;

    log_stage_start(PipelineStage::Grouped.name());
    let groups = group_by_quarter(&quartered);
    log_stage_complete(PipelineStage::Grouped.name(), groups.len(), None);

    log_stage_start(PipelineStage::Summarized.name());
    let summaries = summarize_groups(&groups, config);
    log_stage_complete(
        PipelineStage::Summarized.name(),
        summaries.len(),
        Some(start.elapsed()),
    );

    Ok(summaries)
}
