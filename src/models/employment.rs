//! Employment period model and schedule selection.
//!
//! An employee's working schedule is versioned through employment
//! periods: a schedule change closes the current period and opens a new
//! one, so each period's schedule is immutable. Queries select the single
//! period covering their window.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::schedule::{WeeklySchedule, WorkingScheduleEntry};
use crate::error::{EngineError, EngineResult};

/// One span of an employee's employment history with a fixed schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct EmploymentPeriod {
    /// When this period's schedule took effect.
    pub commencement_date: NaiveDateTime,
    /// When this period was superseded; `None` for the current period.
    pub end_date: Option<NaiveDateTime>,
    /// The weekly schedule in force during this period.
    pub schedule: WeeklySchedule,
}

/// Raw employment record fields as persisted by HR administration.
///
/// The schedule arrives as a list of per-weekday entries and is validated
/// into a [`WeeklySchedule`] when the period is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentRecord {
    /// When this period's schedule took effect.
    pub commencement_date: NaiveDateTime,
    /// When this period was superseded; absent for the current period.
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
    /// Per-weekday schedule entries.
    pub working_days: Vec<WorkingScheduleEntry>,
}

impl TryFrom<EmploymentRecord> for EmploymentPeriod {
    type Error = EngineError;

    fn try_from(record: EmploymentRecord) -> EngineResult<Self> {
        Ok(Self {
            commencement_date: record.commencement_date,
            end_date: record.end_date,
            schedule: WeeklySchedule::from_entries(&record.working_days)?,
        })
    }
}

/// Selects the employment period applicable to a query window.
///
/// The applicable period commenced strictly before `start` and, if it has
/// ended, ended strictly after `end`. A window straddling a schedule
/// change matches no single period and is rejected; callers must split
/// such queries per period.
///
/// # Errors
///
/// Returns [`EngineError::NoApplicableSchedule`] if no period covers the
/// window.
pub fn select_period<'a>(
    periods: &'a [EmploymentPeriod],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> EngineResult<&'a EmploymentPeriod> {
    periods
        .iter()
        .find(|period| {
            start > period.commencement_date
                && period.end_date.map_or(true, |period_end| end < period_end)
        })
        .ok_or(EngineError::NoApplicableSchedule { start, end })
}
