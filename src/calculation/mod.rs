//! Calculation logic for the leave engine.
//!
//! This module contains the computation pipeline for sizing leave
//! requests and accruing balances: wall-clock arithmetic, partial-day
//! boundary coverage, the chargeable-hours walk over a leave interval,
//! the accrual-basis walk over an employment span, and the conversion of
//! accrued hours into leave balances.

mod accrual;
mod accrual_hours;
mod chargeable_hours;
mod clock;
mod partial_day;

pub use accrual::{CumulativeBalances, RemainingBalances, cumulative_balances, remaining_balances};
pub use accrual_hours::scheduled_hours;
pub use chargeable_hours::chargeable_hours;
pub use clock::{hours_between, parse_clock};
pub use partial_day::{end_boundary_hours, start_boundary_hours};

pub(crate) use clock::hours_from_minutes;

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal-hours figure to four fractional digits, half away
/// from zero.
pub(crate) fn round4(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_round4_midpoint_away_from_zero() {
        let dec = |s: &str| Decimal::from_str(s).unwrap();
        assert_eq!(round4(dec("5.00005")), dec("5.0001"));
        assert_eq!(round4(dec("-5.00005")), dec("-5.0001"));
        assert_eq!(round4(dec("5.000049")), dec("5.0000"));
        assert_eq!(round4(dec("5")), dec("5"));
    }
}
