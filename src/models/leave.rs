//! Leave request and balance models.
//!
//! This module defines the leave interval submitted with a request, the
//! accruing leave kinds, and the running usage counters recorded on the
//! employee record.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The two kinds of leave that accrue against worked hours.
///
/// Unpaid leave does not accrue; it only reduces the accrual basis via
/// [`LeaveBalanceCounters::used_unpaid_leave`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    /// Annual leave.
    Annual,
    /// Personal (sick/carer's) leave.
    Personal,
}

/// A single leave request's boundaries at second precision.
///
/// Both endpoints are instants, not dates: a request may start or end
/// mid-working-day, and the partial remainder of those days is credited
/// back when the request is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveInterval {
    /// The first instant of the leave period.
    pub start: NaiveDateTime,
    /// The last instant of the leave period.
    pub end: NaiveDateTime,
}

impl LeaveInterval {
    /// Creates a leave interval, rejecting inverted or empty ranges.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDateRange`] if `end <= start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::LeaveInterval;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2026, 1, 19).unwrap().and_hms_opt(13, 0, 0).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2026, 1, 21).unwrap().and_hms_opt(10, 0, 0).unwrap();
    /// assert!(LeaveInterval::new(start, end).is_ok());
    /// assert!(LeaveInterval::new(end, start).is_err());
    /// ```
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Self> {
        let interval = Self { start, end };
        interval.validate()?;
        Ok(interval)
    }

    /// Checks the `end > start` invariant.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDateRange`] if `end <= start`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end <= self.start {
            return Err(EngineError::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Cumulative leave usage recorded on the employee record.
///
/// These counters are owned and mutated exclusively by the external
/// approval workflow after it consumes this engine's output; the engine
/// only ever reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaveBalanceCounters {
    /// Hours of annual leave already taken.
    #[serde(default)]
    pub used_annual_leave: Decimal,
    /// Hours of personal leave already taken.
    #[serde(default)]
    pub used_personal_leave: Decimal,
    /// Hours of unpaid leave already taken; reduces the accrual basis.
    #[serde(default)]
    pub used_unpaid_leave: Decimal,
}
