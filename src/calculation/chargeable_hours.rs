//! Chargeable-hours calculation for sizing a leave request.
//!
//! A leave request is debited the scheduled net hours of every working,
//! non-holiday day it touches, with the worked portions of the first and
//! last days credited back via the partial-day boundaries.

use chrono::Datelike;
use rust_decimal::Decimal;

use super::partial_day::{end_boundary_hours, start_boundary_hours};
use super::round4;
use crate::error::EngineResult;
use crate::models::{HolidayCalendar, LeaveInterval, WeeklySchedule};

/// Calculates how many hours a leave interval consumes from a balance.
///
/// The interval is walked one calendar day at a time from its first to
/// its last date inclusive. Each working day contributes its net hours
/// unless it is a public holiday; non-working days contribute nothing and
/// are never checked against the calendar. The worked, non-leave portions
/// of the boundary days are then subtracted, unless the boundary day is
/// itself a holiday (in which case it was never counted). The result is
/// rounded to four fractional digits.
///
/// For an interval fully inside one non-holiday working day's scheduled
/// hours, the result equals the wall-clock overlap net of break time.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateRange`] if `interval.end <=
/// interval.start`; nothing is computed in that case.
///
/// [`EngineError::InvalidDateRange`]: crate::error::EngineError::InvalidDateRange
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::chargeable_hours;
/// use leave_engine::models::{LeaveInterval, RegionalHolidayCalendar, WeeklySchedule,
///     WorkingScheduleEntry};
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
/// // A full scheduled Monday charges the day's net hours.
/// let interval = LeaveInterval::new(
///     NaiveDate::from_ymd_opt(2026, 1, 19).unwrap().and_hms_opt(9, 0, 0).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 19).unwrap().and_hms_opt(17, 0, 0).unwrap(),
/// )
/// .unwrap();
/// let calendar = RegionalHolidayCalendar::default();
/// assert_eq!(
///     chargeable_hours(&interval, &schedule, &calendar).unwrap(),
///     Decimal::from(8)
/// );
/// ```
pub fn chargeable_hours(
    interval: &LeaveInterval,
    schedule: &WeeklySchedule,
    holidays: &dyn HolidayCalendar,
) -> EngineResult<Decimal> {
    interval.validate()?;

    let mut total = Decimal::ZERO;
    let mut date = interval.start.date();
    let last = interval.end.date();
    while date <= last {
        if let Some(day) = schedule.day(date.weekday()) {
            if day.gross_hours() > Decimal::ZERO && !holidays.is_holiday(date) {
                total += day.net_hours();
            }
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    let subtract_start = if holidays.is_holiday(interval.start.date()) {
        Decimal::ZERO
    } else {
        start_boundary_hours(schedule, interval.start)
    };
    let subtract_end = if holidays.is_holiday(interval.end.date()) {
        Decimal::ZERO
    } else {
        end_boundary_hours(schedule, interval.end)
    };

    Ok(round4(total - subtract_start - subtract_end))
}
