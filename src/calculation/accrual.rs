//! Leave-balance accrual.
//!
//! Converts the accrual-basis hours of an employment span into cumulative
//! and remaining balances per leave kind, using the configured accrual
//! rates.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accrual_hours::scheduled_hours;
use super::round4;
use crate::config::AccrualRateTable;
use crate::models::WeeklySchedule;

/// Leave earned over an employment span, per accruing kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativeBalances {
    /// Hours of annual leave accrued.
    pub annual: Decimal,
    /// Hours of personal leave accrued.
    pub personal: Decimal,
}

/// Leave still available after subtracting recorded usage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RemainingBalances {
    /// Hours of annual leave remaining.
    pub annual: Decimal,
    /// Hours of personal leave remaining.
    pub personal: Decimal,
}

/// Computes cumulative leave balances as of a point in time.
///
/// The accrual basis is the scheduled hours from `employment_start` to
/// `as_of` — clamped to `now`, since leave cannot accrue in the future —
/// less any unpaid leave already taken. Each kind's balance is the basis
/// divided by its configured rate, rounded to four fractional digits.
/// `now` is an explicit parameter so the computation stays a pure
/// function of its inputs.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::cumulative_balances;
/// use leave_engine::config::AccrualRateTable;
/// use leave_engine::models::{WeeklySchedule, WorkingScheduleEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = WeeklySchedule::from_entries(&[WorkingScheduleEntry {
///     weekday: 1,
///     start_time: "09:00".to_string(),
///     end_time: "17:00".to_string(),
///     break_start: None,
///     break_end: None,
/// }])
/// .unwrap();
/// let rates = AccrualRateTable {
///     annual: Decimal::from(8),
///     personal: Decimal::from(16),
/// };
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2023, 1, 16).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let balances = cumulative_balances(start, as_of, as_of, &schedule, Decimal::ZERO, &rates);
/// assert_eq!(balances.annual, Decimal::from_str("2.0000").unwrap());
/// assert_eq!(balances.personal, Decimal::from_str("1.0000").unwrap());
/// ```
pub fn cumulative_balances(
    employment_start: NaiveDateTime,
    as_of: NaiveDateTime,
    now: NaiveDateTime,
    schedule: &WeeklySchedule,
    used_unpaid_leave: Decimal,
    rates: &AccrualRateTable,
) -> CumulativeBalances {
    let capped = if as_of > now { now } else { as_of };
    let fixed_hours = scheduled_hours(employment_start, capped, schedule);
    let basis = fixed_hours - used_unpaid_leave;

    CumulativeBalances {
        annual: round4(basis / rates.annual),
        personal: round4(basis / rates.personal),
    }
}

/// Subtracts recorded usage from cumulative balances.
pub fn remaining_balances(
    cumulative: &CumulativeBalances,
    used_annual_leave: Decimal,
    used_personal_leave: Decimal,
) -> RemainingBalances {
    RemainingBalances {
        annual: round4(cumulative.annual - used_annual_leave),
        personal: round4(cumulative.personal - used_personal_leave),
    }
}
