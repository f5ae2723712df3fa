//! Working-schedule models.
//!
//! This module defines the per-weekday schedule entries recorded on the
//! employee record and the validated weekly lookup built from them.

use chrono::{NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{hours_from_minutes, parse_clock};
use crate::error::{EngineError, EngineResult};

/// A raw per-weekday schedule entry as persisted on the employee record.
///
/// Weekdays are Sunday-based (0 = Sunday .. 6 = Saturday) and times of day
/// are "HH:MM" wall-clock strings, matching the schedule JSON written by
/// HR administration. Entries are validated into a [`WeeklySchedule`]
/// before any hour computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingScheduleEntry {
    /// The weekday this entry applies to (0 = Sunday .. 6 = Saturday).
    pub weekday: u8,
    /// The scheduled start of the working day, e.g. "09:00".
    pub start_time: String,
    /// The scheduled end of the working day, e.g. "17:00".
    pub end_time: String,
    /// The start of the unpaid break, if the day has one.
    #[serde(default)]
    pub break_start: Option<String>,
    /// The end of the unpaid break, if the day has one.
    #[serde(default)]
    pub break_end: Option<String>,
}

/// A validated scheduled working day.
///
/// Gross, break and net hours are derived from the clock times on demand;
/// they are never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySchedule {
    start_time: NaiveTime,
    end_time: NaiveTime,
    break_span: Option<(NaiveTime, NaiveTime)>,
}

impl DaySchedule {
    /// The scheduled start of the working day.
    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    /// The scheduled end of the working day.
    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    /// The break span, if the day has one.
    pub fn break_span(&self) -> Option<(NaiveTime, NaiveTime)> {
        self.break_span
    }

    /// Scheduled duration from start to end, before break subtraction.
    pub fn gross_hours(&self) -> Decimal {
        hours_from_minutes((self.end_time - self.start_time).num_minutes())
    }

    /// Duration of the break, or zero if the day has none.
    pub fn break_hours(&self) -> Decimal {
        match self.break_span {
            Some((start, end)) => hours_from_minutes((end - start).num_minutes()),
            None => Decimal::ZERO,
        }
    }

    /// Gross hours minus break hours.
    pub fn net_hours(&self) -> Decimal {
        self.gross_hours() - self.break_hours()
    }

    pub(crate) fn gross_seconds(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }
}

/// A weekday-to-schedule lookup for one employment period.
///
/// Weekdays absent from the input are non-working days: they report zero
/// gross hours and carry no clock times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklySchedule {
    days: [Option<DaySchedule>; 7],
}

impl WeeklySchedule {
    /// Builds a weekly lookup from a list of raw entries.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimeFormat`] if any clock string fails
    /// to parse, and [`EngineError::InvalidScheduleEntry`] if:
    /// - the weekday is outside 0..=6,
    /// - two entries name the same weekday,
    /// - the end time is not after the start time,
    /// - a break is half-specified, or falls outside the working day.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::{WeeklySchedule, WorkingScheduleEntry};
    /// use chrono::Weekday;
    /// use rust_decimal::Decimal;
    ///
    /// let schedule = WeeklySchedule::from_entries(&[WorkingScheduleEntry {
    ///     weekday: 1,
    ///     start_time: "10:00".to_string(),
    ///     end_time: "14:30".to_string(),
    ///     break_start: None,
    ///     break_end: None,
    /// }])
    /// .unwrap();
    ///
    /// assert_eq!(schedule.gross_hours(Weekday::Mon), Decimal::new(45, 1)); // 4.5
    /// assert_eq!(schedule.gross_hours(Weekday::Tue), Decimal::ZERO);
    /// ```
    pub fn from_entries(entries: &[WorkingScheduleEntry]) -> EngineResult<Self> {
        let mut days: [Option<DaySchedule>; 7] = Default::default();

        for entry in entries {
            let weekday = entry.weekday;
            if weekday > 6 {
                return Err(EngineError::InvalidScheduleEntry {
                    weekday,
                    message: "weekday must be between 0 (Sunday) and 6 (Saturday)".to_string(),
                });
            }

            let invalid = |message: &str| EngineError::InvalidScheduleEntry {
                weekday,
                message: message.to_string(),
            };

            let start_time = parse_clock(&entry.start_time)?;
            let end_time = parse_clock(&entry.end_time)?;
            if end_time <= start_time {
                return Err(invalid("end time must be after start time"));
            }

            let break_span = match (&entry.break_start, &entry.break_end) {
                (Some(break_start), Some(break_end)) => {
                    let break_start = parse_clock(break_start)?;
                    let break_end = parse_clock(break_end)?;
                    if break_end <= break_start {
                        return Err(invalid("break end must be after break start"));
                    }
                    if break_start < start_time || break_end > end_time {
                        return Err(invalid("break must fall within the working day"));
                    }
                    Some((break_start, break_end))
                }
                (None, None) => None,
                _ => return Err(invalid("break start and break end must both be set")),
            };

            let slot = &mut days[weekday as usize];
            if slot.is_some() {
                return Err(invalid("duplicate entry for weekday"));
            }
            *slot = Some(DaySchedule {
                start_time,
                end_time,
                break_span,
            });
        }

        Ok(Self { days })
    }

    /// Returns the scheduled day for a weekday, or `None` on non-working days.
    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.days[weekday.num_days_from_sunday() as usize].as_ref()
    }

    /// Gross hours scheduled for a weekday; zero on non-working days.
    pub fn gross_hours(&self, weekday: Weekday) -> Decimal {
        self.day(weekday)
            .map(DaySchedule::gross_hours)
            .unwrap_or(Decimal::ZERO)
    }

    /// Net hours scheduled for a weekday; zero on non-working days.
    pub fn net_hours(&self, weekday: Weekday) -> Decimal {
        self.day(weekday)
            .map(DaySchedule::net_hours)
            .unwrap_or(Decimal::ZERO)
    }

    /// Total gross hours scheduled across the whole week.
    pub fn weekly_hours(&self) -> Decimal {
        self.days
            .iter()
            .flatten()
            .map(DaySchedule::gross_hours)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(weekday: u8, start: &str, end: &str) -> WorkingScheduleEntry {
        WorkingScheduleEntry {
            weekday,
            start_time: start.to_string(),
            end_time: end.to_string(),
            break_start: None,
            break_end: None,
        }
    }

    fn entry_with_break(
        weekday: u8,
        start: &str,
        end: &str,
        break_start: &str,
        break_end: &str,
    ) -> WorkingScheduleEntry {
        WorkingScheduleEntry {
            weekday,
            start_time: start.to_string(),
            end_time: end.to_string(),
            break_start: Some(break_start.to_string()),
            break_end: Some(break_end.to_string()),
        }
    }

    /// WS-001: three-day irregular week
    #[test]
    fn test_irregular_week_lookup() {
        let schedule = WeeklySchedule::from_entries(&[
            entry(1, "10:00", "14:30"),
            entry(3, "09:00", "16:00"),
            entry(5, "09:00", "14:00"),
        ])
        .unwrap();

        assert_eq!(schedule.gross_hours(Weekday::Mon), dec("4.5"));
        assert_eq!(schedule.gross_hours(Weekday::Wed), dec("7"));
        assert_eq!(schedule.gross_hours(Weekday::Fri), dec("5"));
        assert_eq!(schedule.weekly_hours(), dec("16.5"));
    }

    /// WS-002: absent weekday reports zero and no clock times
    #[test]
    fn test_absent_weekday_is_non_working() {
        let schedule = WeeklySchedule::from_entries(&[entry(1, "09:00", "17:00")]).unwrap();

        assert!(schedule.day(Weekday::Tue).is_none());
        assert_eq!(schedule.gross_hours(Weekday::Tue), Decimal::ZERO);
        assert_eq!(schedule.net_hours(Weekday::Tue), Decimal::ZERO);
    }

    /// WS-003: break subtraction in net hours
    #[test]
    fn test_break_hours_derivation() {
        let schedule =
            WeeklySchedule::from_entries(&[entry_with_break(3, "09:00", "16:00", "12:00", "12:30")])
                .unwrap();

        let day = schedule.day(Weekday::Wed).unwrap();
        assert_eq!(day.gross_hours(), dec("7"));
        assert_eq!(day.break_hours(), dec("0.5"));
        assert_eq!(day.net_hours(), dec("6.5"));
    }

    #[test]
    fn test_rejects_end_before_start() {
        let err = WeeklySchedule::from_entries(&[entry(2, "17:00", "09:00")]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidScheduleEntry { weekday: 2, .. }
        ));
    }

    #[test]
    fn test_rejects_zero_length_day() {
        assert!(WeeklySchedule::from_entries(&[entry(2, "09:00", "09:00")]).is_err());
    }

    #[test]
    fn test_rejects_weekday_out_of_range() {
        let err = WeeklySchedule::from_entries(&[entry(7, "09:00", "17:00")]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidScheduleEntry { weekday: 7, .. }
        ));
    }

    #[test]
    fn test_rejects_duplicate_weekday() {
        let err = WeeklySchedule::from_entries(&[
            entry(1, "09:00", "17:00"),
            entry(1, "10:00", "12:00"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidScheduleEntry { weekday: 1, .. }
        ));
    }

    #[test]
    fn test_rejects_break_outside_working_day() {
        assert!(
            WeeklySchedule::from_entries(&[entry_with_break(
                3, "09:00", "16:00", "08:00", "08:30"
            )])
            .is_err()
        );
        assert!(
            WeeklySchedule::from_entries(&[entry_with_break(
                3, "09:00", "16:00", "15:45", "16:15"
            )])
            .is_err()
        );
    }

    #[test]
    fn test_rejects_inverted_break() {
        assert!(
            WeeklySchedule::from_entries(&[entry_with_break(
                3, "09:00", "16:00", "12:30", "12:00"
            )])
            .is_err()
        );
    }

    #[test]
    fn test_rejects_half_specified_break() {
        let mut half = entry(3, "09:00", "16:00");
        half.break_start = Some("12:00".to_string());
        assert!(WeeklySchedule::from_entries(&[half]).is_err());
    }

    #[test]
    fn test_rejects_malformed_clock_string() {
        let err = WeeklySchedule::from_entries(&[entry(1, "9am", "17:00")]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidTimeFormat { .. }));
    }

    #[test]
    fn test_break_may_touch_day_boundaries() {
        // start <= break_start < break_end <= end permits touching edges
        let schedule =
            WeeklySchedule::from_entries(&[entry_with_break(3, "09:00", "16:00", "09:00", "09:30")])
                .unwrap();
        assert_eq!(schedule.day(Weekday::Wed).unwrap().break_hours(), dec("0.5"));
    }

    #[test]
    fn test_entry_deserialization() {
        let json = r#"{
            "weekday": 3,
            "start_time": "09:00",
            "end_time": "16:00",
            "break_start": "12:00",
            "break_end": "12:30"
        }"#;

        let entry: WorkingScheduleEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.weekday, 3);
        assert_eq!(entry.break_start.as_deref(), Some("12:00"));
    }

    #[test]
    fn test_entry_serialization_round_trip() {
        let original = entry_with_break(5, "09:00", "14:00", "11:00", "11:15");
        let json = serde_json::to_string(&original).unwrap();
        let back: WorkingScheduleEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }
}
