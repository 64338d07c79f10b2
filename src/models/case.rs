//! Case entity model
//!
//! A case is one stroke presentation: the month it happened in plus the
//! timing measurements recorded for it. The pipeline enriches a parsed
//! [`CaseRecord`] into a [`DatedCase`] and then a [`QuarteredCase`], each
//! stage producing a new value rather than mutating the previous one.

use chrono::NaiveDate;

use crate::models::quarter::QuarterInterval;
use crate::schema;

/// Duration measurements carried by every case, in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    DoorToDoctor,
    DoorToCt,
    CtEndToRead,
    CbcOrderToResult,
    InrOrderToResult,
    DoorToNeedle,
    TpaOrderToDelivery,
}

impl Metric {
    /// All metrics in schema column order
    pub const ALL: [Self; 7] = [
        Self::DoorToDoctor,
        Self::DoorToCt,
        Self::CtEndToRead,
        Self::CbcOrderToResult,
        Self::InrOrderToResult,
        Self::DoorToNeedle,
        Self::TpaOrderToDelivery,
    ];

    /// Input column holding this metric
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::DoorToDoctor => schema::COL_DOOR_TO_DOCTOR,
            Self::DoorToCt => schema::COL_DOOR_TO_CT,
            Self::CtEndToRead => schema::COL_CT_END_TO_READ,
            Self::CbcOrderToResult => schema::COL_CBC_ORDER_TO_RESULT,
            Self::InrOrderToResult => schema::COL_INR_ORDER_TO_RESULT,
            Self::DoorToNeedle => schema::COL_DOOR_TO_NEEDLE,
            Self::TpaOrderToDelivery => schema::COL_TPA_ORDER_TO_DELIVERY,
        }
    }
}

/// A case as parsed from one input row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaseRecord {
    /// 1-based data row number (header excluded)
    pub row: usize,
    /// Raw year text
    pub year_text: String,
    /// Raw month text
    pub month_text: String,
    /// Parsed year, `None` if not an integer
    pub year: Option<i32>,
    /// Parsed 1-based month, `None` if not a non-negative integer
    pub month: Option<u32>,
    /// Case identifier as written in the input
    pub case_id: String,
    pub door_to_doctor: Option<f64>,
    pub door_to_ct: Option<f64>,
    pub ct_end_to_read: Option<f64>,
    pub cbc_order_to_result: Option<f64>,
    pub inr_order_to_result: Option<f64>,
    pub door_to_needle: Option<f64>,
    pub tpa_order_to_delivery: Option<f64>,
}

impl CaseRecord {
    /// Value of `metric` for this case, `None` when missing
    #[must_use]
    pub const fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::DoorToDoctor => self.door_to_doctor,
            Metric::DoorToCt => self.door_to_ct,
            Metric::CtEndToRead => self.ct_end_to_read,
            Metric::CbcOrderToResult => self.cbc_order_to_result,
            Metric::InrOrderToResult => self.inr_order_to_result,
            Metric::DoorToNeedle => self.door_to_needle,
            Metric::TpaOrderToDelivery => self.tpa_order_to_delivery,
        }
    }

    /// Mutable slot for `metric`, used while parsing
    pub fn metric_mut(&mut self, metric: Metric) -> &mut Option<f64> {
        match metric {
            Metric::DoorToDoctor => &mut self.door_to_doctor,
            Metric::DoorToCt => &mut self.door_to_ct,
            Metric::CtEndToRead => &mut self.ct_end_to_read,
            Metric::CbcOrderToResult => &mut self.cbc_order_to_result,
            Metric::InrOrderToResult => &mut self.inr_order_to_result,
            Metric::DoorToNeedle => &mut self.door_to_needle,
            Metric::TpaOrderToDelivery => &mut self.tpa_order_to_delivery,
        }
    }

    /// Display key built by concatenating the raw year and month text
    #[must_use]
    pub fn date_key(&self) -> String {
        format!("{}{}", self.year_text, self.month_text)
    }
}

/// A case with its derived calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct DatedCase {
    pub record: CaseRecord,
    /// First day of the case's month
    pub date: NaiveDate,
    /// Opaque display token, not used for arithmetic
    pub date_key: String,
}

/// A dated case together with the rolling quarter that contains it
#[derive(Debug, Clone, PartialEq)]
pub struct QuarteredCase {
    pub dated: DatedCase,
    pub quarter: QuarterInterval,
}

impl QuarteredCase {
    /// Value of `metric` for the underlying case
    #[must_use]
    pub const fn metric(&self, metric: Metric) -> Option<f64> {
        self.dated.record.metric(metric)
    }

    /// The case's derived date
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.dated.date
    }
}
