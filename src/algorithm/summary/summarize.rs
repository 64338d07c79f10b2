//! Quarter summarizer
//!
//! Groups quartered cases by quarter index and folds each group into a
//! [`QuarterSummary`] with median timings and display labels.

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::algorithm::summary::statistics::metric_median;
use crate::config::{NeedleMetric, PipelineConfig};
use crate::models::case::{Metric, QuarteredCase};
use crate::models::quarter::{QuarterInterval, QuarterSummary};
use crate::utils::{log_warning, month_abbrev, year_month_label};

/// Cases sharing one rolling quarter
#[derive(Debug, Clone)]
pub struct QuarterGroup<'a> {
    /// Quarter index shared by every case in the group
    pub qtr_id: usize,
    pub cases: Vec<&'a QuarteredCase>,
}

impl QuarterGroup<'_> {
    /// Boundaries of the group's quarter, taken from its first case
    #[must_use]
    pub fn quarter(&self) -> Option<QuarterInterval> {
        self.cases.first().map(|case| case.quarter)
    }
}

impl From<NeedleMetric> for Metric {
    fn from(value: NeedleMetric) -> Self {
        match value {
            NeedleMetric::DoorToNeedle => Self::DoorToNeedle,
            NeedleMetric::TpaOrderToDelivery => Self::TpaOrderToDelivery,
        }
    }
}

/// Group cases by quarter index, ordered by ascending index
#[must_use]
pub fn group_by_quarter(cases: &[QuarteredCase]) -> Vec<QuarterGroup<'_>> {
    let mut groups: FxHashMap<usize, Vec<&QuarteredCase>> = FxHashMap::default();
    for case in cases {
        groups.entry(case.quarter.index).or_default().push(case);
    }

    groups
        .into_iter()
        .sorted_by_key(|(qtr_id, _)| *qtr_id)
        .map(|(qtr_id, cases)| QuarterGroup { qtr_id, cases })
        .collect_vec()
}

/// Axis label for a quarter, e.g. `Jan-Mar\n2021`
#[must_use]
pub fn quarter_label(quarter: &QuarterInterval) -> String {
    format!(
        "{}-{}\n{}",
        month_abbrev(quarter.start),
        month_abbrev(quarter.end),
        quarter.end.format("%Y")
    )
}

/// Fold one group into its summary.
///
/// Returns `None` for a group without cases.
#[must_use]
pub fn summarize_group(
    group: &QuarterGroup<'_>,
    needle_metric: NeedleMetric,
) -> Option<QuarterSummary> {
    let quarter = group.quarter()?;
    let median_of = |metric: Metric| {
        let value = metric_median(group.cases.iter().copied(), metric);
        if value.is_none() {
            log_warning(
                &format!(
                    "No values for '{}' in quarter {}",
                    metric.column(),
                    group.qtr_id
                ),
                None,
            );
        }
        value
    };

    Some(QuarterSummary {
        qtr_id: group.qtr_id,
        qtr_begin: year_month_label(quarter.start),
        qtr_end: year_month_label(quarter.end),
        qtr_label: quarter_label(&quarter),
        med_d2dr: median_of(Metric::DoorToDoctor),
        med_d2ct: median_of(Metric::DoorToCt),
        med_d2rx: median_of(needle_metric.into()),
    })
}

/// Summarize the most recent `config.retained_quarters` quarters.
///
/// Output is ordered by ascending `qtr_id`, most recent quarter first.
#[must_use]
pub fn summarize(cases: &[QuarteredCase], config: &PipelineConfig) -> Vec<QuarterSummary> {
    summarize_groups(&group_by_quarter(cases), config)
}

/// Summarize already grouped cases, keeping `qtr_id < config.retained_quarters`
#[must_use]
pub fn summarize_groups(
    groups: &[QuarterGroup<'_>],
    config: &PipelineConfig,
) -> Vec<QuarterSummary> {
    let total = groups.len();

    let summaries = groups
        .iter()
        .filter(|group| group.qtr_id < config.retained_quarters)
        .filter_map(|group| summarize_group(group, config.needle_metric))
        .collect_vec();

    log::debug!(
        "Kept {} of {} quarter groups (retaining qtr_id < {})",
        summaries.len(),
        total,
        config.retained_quarters
    );
    summaries
}
