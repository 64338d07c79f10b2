//! Configuration for the rolling-quarter pipeline.

use std::str::FromStr;

/// Environment variable overriding how many recent quarters are kept
pub const ENV_RETAINED_QUARTERS: &str = "STROKE_READY_RETAINED_QUARTERS";
/// Environment variable overriding the invalid-date policy (`reject` / `skip`)
pub const ENV_INVALID_DATES: &str = "STROKE_READY_INVALID_DATES";
/// Environment variable choosing the column behind `med_d2rx`
pub const ENV_NEEDLE_METRIC: &str = "STROKE_READY_NEEDLE_METRIC";

/// Number of most recent rolling quarters kept in the output by default
pub const DEFAULT_RETAINED_QUARTERS: usize = 4;

/// What to do with a row whose year/month cannot form a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidDatePolicy {
    /// Fail the whole run with `InvalidDate`
    #[default]
    Reject,
    /// Drop the row with a warning and continue
    Skip,
}

impl FromStr for InvalidDatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "skip" => Ok(Self::Skip),
            other => Err(format!("Unknown invalid-date policy: {other}")),
        }
    }
}

/// Source column for the door-to-needle median
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeedleMetric {
    /// The `tPA order to tPA delivered time` column, the door-to-needle proxy
    #[default]
    TpaOrderToDelivery,
    /// The `Door to Needle` column
    DoorToNeedle,
}

impl FromStr for NeedleMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "door_to_needle" => Ok(Self::DoorToNeedle),
            "tpa_order" => Ok(Self::TpaOrderToDelivery),
            other => Err(format!("Unknown needle metric: {other}")),
        }
    }
}

/// Configuration for a single pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Summaries with `qtr_id` below this value are kept
    pub retained_quarters: usize,
    /// Handling of rows with an unusable year or month
    pub invalid_date_policy: InvalidDatePolicy,
    /// Column summarized as `med_d2rx`
    pub needle_metric: NeedleMetric,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            retained_quarters: DEFAULT_RETAINED_QUARTERS,
            invalid_date_policy: InvalidDatePolicy::default(),
            needle_metric: NeedleMetric::default(),
        }
    }
}

impl PipelineConfig {
    /// Build a configuration from defaults plus any environment overrides.
    ///
    /// Values that fail to parse are logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_RETAINED_QUARTERS) {
            match raw.trim().parse::<usize>() {
                Ok(n) => config.retained_quarters = n,
                Err(e) => log::warn!("Ignoring {ENV_RETAINED_QUARTERS}={raw}: {e}"),
            }
        }

        if let Some(raw) = lookup(ENV_INVALID_DATES) {
            match raw.parse() {
                Ok(policy) => config.invalid_date_policy = policy,
                Err(e) => log::warn!("Ignoring {ENV_INVALID_DATES}: {e}"),
            }
        }

        if let Some(raw) = lookup(ENV_NEEDLE_METRIC) {
            match raw.parse() {
                Ok(metric) => config.needle_metric = metric,
                Err(e) => log::warn!("Ignoring {ENV_NEEDLE_METRIC}: {e}"),
            }
        }

        config
    }

    /// Set the number of retained quarters
    #[must_use]
    pub const fn with_retained_quarters(mut self, retained_quarters: usize) -> Self {
        self.retained_quarters = retained_quarters;
        self
    }

    /// Set the invalid-date policy
    #[must_use]
    pub const fn with_invalid_date_policy(mut self, policy: InvalidDatePolicy) -> Self {
        self.invalid_date_policy = policy;
        self
    }

    /// Set the column summarized as `med_d2rx`
    #[must_use]
    pub const fn with_needle_metric(mut self, metric: NeedleMetric) -> Self {
        self.needle_metric = metric;
        self
    }
}
