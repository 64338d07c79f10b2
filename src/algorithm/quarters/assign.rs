//! Quarter assignment

use crate::error::{Result, StrokeReadyError};
use crate::models::case::{DatedCase, QuarteredCase};
use crate::models::quarter::QuarterInterval;

/// Pair a dated case with the quarter containing its date.
///
/// Quarters are disjoint, so the first match is the only match. A case no
/// quarter contains means the quarters were generated wrongly and is
/// reported as `UnassignedQuarter`.
pub fn assign_quarter(case: DatedCase, quarters: &[QuarterInterval]) -> Result<QuarteredCase> {
    match quarters.iter().find(|q| q.contains(case.date)) {
        Some(quarter) => Ok(QuarteredCase {
            dated: case,
            quarter: *quarter,
        }),
        None => Err(StrokeReadyError::unassigned_quarter(
            case.record.row,
            case.date,
        )),
    }
}

/// Assign every case to its quarter, failing on the first unassignable one
pub fn assign_quarters(
    cases: Vec<DatedCase>,
    quarters: &[QuarterInterval],
) -> Result<Vec<QuarteredCase>> {
    cases
        .into_iter()
        .map(|case| assign_quarter(case, quarters))
        .collect()
}
