//! Partial-day boundary calculations.
//!
//! When a leave interval starts or ends mid-day, the rest of that
//! calendar day is still worked. These functions compute how many
//! scheduled, non-leave hours fall on the boundary day outside the leave
//! interval, net of any break overlap. Holiday suppression is the
//! caller's responsibility; this module only knows the schedule.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;

use super::clock::hours_from_seconds;
use crate::models::WeeklySchedule;

/// Hours worked on the boundary day before leave begins at `at`.
///
/// The worked span runs from the day's scheduled start up to `at`,
/// clamped to the day's gross hours; the overlap of that span with the
/// break is subtracted, clamped to the break's own length. Non-working
/// weekdays yield zero.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::start_boundary_hours;
/// use leave_engine::models::{WeeklySchedule, WorkingScheduleEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let schedule = WeeklySchedule::from_entries(&[WorkingScheduleEntry {
///     weekday: 1,
///     start_time: "09:00".to_string(),
///     end_time: "17:00".to_string(),
///     break_start: None,
///     break_end: None,
/// }])
/// .unwrap();
///
/// // Leave from Monday 13:00: the morning's four hours were worked.
/// let at = NaiveDate::from_ymd_opt(2026, 1, 19).unwrap().and_hms_opt(13, 0, 0).unwrap();
/// assert_eq!(start_boundary_hours(&schedule, at), Decimal::from(4));
/// ```
pub fn start_boundary_hours(schedule: &WeeklySchedule, at: NaiveDateTime) -> Decimal {
    let Some(day) = schedule.day(at.date().weekday()) else {
        return Decimal::ZERO;
    };

    let day_start = at.date().and_time(day.start_time());
    let excess = coverage_seconds(at, day_start, day.gross_seconds());

    let break_excess = match day.break_span() {
        Some((break_start, break_end)) => {
            let break_anchor = at.date().and_time(break_start);
            let break_seconds = (break_end - break_start).num_seconds();
            coverage_seconds(at, break_anchor, break_seconds)
        }
        None => 0,
    };

    hours_from_seconds(excess - break_excess)
}

/// Hours worked on the boundary day after leave ends at `at`.
///
/// Mirror image of [`start_boundary_hours`]: the worked span runs from
/// `at` to the day's scheduled end, clamped to the gross hours, with the
/// remaining break overlap subtracted.
pub fn end_boundary_hours(schedule: &WeeklySchedule, at: NaiveDateTime) -> Decimal {
    let Some(day) = schedule.day(at.date().weekday()) else {
        return Decimal::ZERO;
    };

    let day_end = at.date().and_time(day.end_time());
    let excess = coverage_seconds(day_end, at, day.gross_seconds());

    let break_excess = match day.break_span() {
        Some((break_start, break_end)) => {
            let break_anchor = at.date().and_time(break_end);
            let break_seconds = (break_end - break_start).num_seconds();
            coverage_seconds(break_anchor, at, break_seconds)
        }
        None => 0,
    };

    hours_from_seconds(excess - break_excess)
}

/// Seconds from `from` to `to`, clamped to `[0, cap_seconds]`.
fn coverage_seconds(to: NaiveDateTime, from: NaiveDateTime, cap_seconds: i64) -> i64 {
    (to - from).num_seconds().clamp(0, cap_seconds)
}
