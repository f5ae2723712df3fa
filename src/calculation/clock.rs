//! Wall-clock arithmetic.
//!
//! Schedules on the employee record store times of day as "HH:MM" strings.
//! This module parses those values and converts pairs of them into decimal
//! hour durations for gross- and break-hours derivation.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Parses a wall-clock value in "HH:MM" form.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`] if the value is not a
/// parseable time of day.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::parse_clock;
/// use chrono::NaiveTime;
///
/// let time = parse_clock("09:30").unwrap();
/// assert_eq!(time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
/// assert!(parse_clock("25:00").is_err());
/// ```
pub fn parse_clock(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| EngineError::InvalidTimeFormat {
        value: value.to_string(),
    })
}

/// Calculates how many hours lie between two wall-clock values.
///
/// Both values are times of day within a single day; the computation does
/// not cross midnight. The result is signed, so an end earlier than the
/// start yields a negative duration — schedule validation rejects such
/// pairs before they reach any hour accumulation.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`] if either value fails to
/// parse.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::hours_between;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hours_between("10:00", "14:30").unwrap(), Decimal::new(45, 1)); // 4.5
/// ```
pub fn hours_between(start: &str, end: &str) -> EngineResult<Decimal> {
    let from = parse_clock(start)?;
    let to = parse_clock(end)?;
    Ok(hours_from_minutes((to - from).num_minutes()))
}

/// Converts a minute count into decimal hours.
pub(crate) fn hours_from_minutes(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Converts a second count into decimal hours.
pub(crate) fn hours_from_seconds(seconds: i64) -> Decimal {
    Decimal::new(seconds, 0) / Decimal::new(3600, 0)
}
