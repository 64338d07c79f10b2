//! Output helpers for quarter summaries
//!
//! The chart renderer consumes summaries as a JSON array; [`tabulate`]
//! gives a plain-text view of the same numbers.

use itertools::Itertools;

use crate::error::Result;
use crate::models::quarter::QuarterSummary;

/// Encode summaries as a pretty-printed JSON array
pub fn to_json(summaries: &[QuarterSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}

/// Summaries in chart order: oldest quarter first, most recent rightmost
#[must_use]
pub fn chart_order(summaries: &[QuarterSummary]) -> Vec<&QuarterSummary> {
    summaries
        .iter()
        .sorted_by(|a, b| b.qtr_id.cmp(&a.qtr_id))
        .collect_vec()
}

fn format_minutes(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

/// Render summaries as a fixed-width text table in chart order
#[must_use]
pub fn tabulate(summaries: &[QuarterSummary]) -> String {
    let mut table = String::new();
    table.push_str(&format!(
        "{:<14} {:>14} {:>12} {:>16}\n",
        "Quarter", "Door to Doctor", "Door to CT", "Door to Treatment"
    ));

    for summary in chart_order(summaries) {
        let label = summary.qtr_label.replace('\n', " ");
        table.push_str(&format!(
            "{:<14} {:>14} {:>12} {:>16}\n",
            label,
            format_minutes(summary.med_d2dr),
            format_minutes(summary.med_d2ct),
            format_minutes(summary.med_d2rx)
        ));
    }

    table
}
