//! Error types for the leave engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during working-hours and
//! leave-accrual computation.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the leave engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every error
/// is raised synchronously to the caller; nothing is retried internally,
/// since the computation is deterministic and a retry cannot repair a
/// malformed input.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     value: "25:99".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time of day '25:99': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A wall-clock value could not be parsed as a time of day.
    #[error("Invalid time of day '{value}': expected HH:MM")]
    InvalidTimeFormat {
        /// The value that failed to parse.
        value: String,
    },

    /// A working-schedule entry contained inconsistent data.
    #[error("Invalid schedule entry for weekday {weekday}: {message}")]
    InvalidScheduleEntry {
        /// The weekday of the invalid entry (0 = Sunday .. 6 = Saturday).
        weekday: u8,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A leave interval ended at or before its start.
    #[error("Invalid date range: end {end} is not after start {start}")]
    InvalidDateRange {
        /// The start of the rejected interval.
        start: NaiveDateTime,
        /// The end of the rejected interval.
        end: NaiveDateTime,
    },

    /// No employment period covers the queried window.
    #[error("No employment period covers the window {start} to {end}")]
    NoApplicableSchedule {
        /// The start of the query window.
        start: NaiveDateTime,
        /// The end of the query window.
        end: NaiveDateTime,
    },

    /// No country/region pair was supplied for holiday lookup.
    #[error("Missing jurisdiction: a country and region are required for holiday lookup")]
    MissingJurisdiction,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
