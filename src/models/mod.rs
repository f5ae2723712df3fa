//! Core data models for the leave engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employment;
mod holiday;
mod leave;
mod schedule;

pub use employment::{EmploymentPeriod, EmploymentRecord, select_period};
pub use holiday::{
    HolidayCalendar, Jurisdiction, NATIONAL_REGION, PublicHoliday, RegionalHolidayCalendar,
};
pub use leave::{LeaveBalanceCounters, LeaveInterval, LeaveKind};
pub use schedule::{DaySchedule, WeeklySchedule, WorkingScheduleEntry};
