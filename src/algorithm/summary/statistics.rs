//! Median statistics over case metrics

use crate::models::case::{Metric, QuarteredCase};

/// Median of `values`: the middle value for an odd count, the mean of the two
/// middle values for an even count.
///
/// Returns `None` for an empty slice or when any value is NaN.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() || values.iter().any(|v| v.is_nan()) {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Median of one metric across `cases`, ignoring cases missing that metric
#[must_use]
pub fn metric_median<'a, I>(cases: I, metric: Metric) -> Option<f64>
where
    I: IntoIterator<Item = &'a QuarteredCase>,
{
    let values: Vec<f64> = cases
        .into_iter()
        .filter_map(|case| case.metric(metric))
        .collect();
    median(&values)
}
