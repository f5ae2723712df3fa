//! Configuration types for the leave engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::{Jurisdiction, LeaveKind, PublicHoliday, RegionalHolidayCalendar};

/// Metadata about the leave policy.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
}

/// Accrual-rate divisors per leave kind.
///
/// Each value is the number of worked hours that earns one hour of leave
/// of that kind. The divisors are policy configuration, never derived.
#[derive(Debug, Clone, Deserialize)]
pub struct AccrualRateTable {
    /// Worked hours per hour of annual leave.
    pub annual: Decimal,
    /// Worked hours per hour of personal leave.
    pub personal: Decimal,
}

impl AccrualRateTable {
    /// Returns the divisor for a leave kind.
    pub fn divisor(&self, kind: LeaveKind) -> Decimal {
        match kind {
            LeaveKind::Annual => self.annual,
            LeaveKind::Personal => self.personal,
        }
    }
}

/// The policy configuration file structure (`policy.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// Policy metadata.
    pub metadata: PolicyMetadata,
    /// Accrual-rate divisors.
    pub accrual_rates: AccrualRateTable,
}

/// One country's public holiday table (`holidays/<country>.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayTable {
    /// Country abbreviation the table belongs to.
    pub country: String,
    /// Published holidays, national or region-scoped.
    pub holidays: Vec<PublicHoliday>,
}

/// The complete engine configuration loaded from a directory.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    policy: PolicyConfig,
    /// Holiday tables keyed by lowercased country abbreviation.
    holiday_tables: HashMap<String, HolidayTable>,
}

impl EngineConfig {
    /// Creates a configuration from its component parts.
    pub fn new(policy: PolicyConfig, tables: Vec<HolidayTable>) -> Self {
        let holiday_tables = tables
            .into_iter()
            .map(|table| (table.country.to_lowercase(), table))
            .collect();
        Self {
            policy,
            holiday_tables,
        }
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.policy.metadata
    }

    /// Returns the accrual-rate divisors.
    pub fn accrual_rates(&self) -> &AccrualRateTable {
        &self.policy.accrual_rates
    }

    /// Materializes the holiday calendar for a jurisdiction.
    ///
    /// An unknown country or region yields an empty calendar rather than
    /// an error: holiday data is advisory and an uncovered jurisdiction
    /// simply has no published holidays to suppress.
    pub fn calendar(&self, jurisdiction: &Jurisdiction) -> RegionalHolidayCalendar {
        match self.holiday_tables.get(&jurisdiction.country.to_lowercase()) {
            Some(table) => {
                RegionalHolidayCalendar::for_jurisdiction(&table.holidays, jurisdiction)
            }
            None => RegionalHolidayCalendar::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HolidayCalendar, LeaveKind, NATIONAL_REGION};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn config() -> EngineConfig {
        let policy = PolicyConfig {
            metadata: PolicyMetadata {
                name: "Staff Leave Policy".to_string(),
                version: "2025-07-01".to_string(),
            },
            accrual_rates: AccrualRateTable {
                annual: Decimal::from_str("13.05714").unwrap(),
                personal: Decimal::from_str("26.071428").unwrap(),
            },
        };
        let table = HolidayTable {
            country: "AU".to_string(),
            holidays: vec![
                PublicHoliday {
                    date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
                    name: "Australia Day".to_string(),
                    region: NATIONAL_REGION.to_string(),
                },
                PublicHoliday {
                    date: NaiveDate::from_ymd_opt(2026, 11, 3).unwrap(),
                    name: "Melbourne Cup Day".to_string(),
                    region: "vic".to_string(),
                },
            ],
        };
        EngineConfig::new(policy, vec![table])
    }

    #[test]
    fn test_calendar_merges_national_and_region() {
        let config = config();
        let vic = Jurisdiction::new("au", "vic").unwrap();
        let calendar = config.calendar(&vic);
        assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()));
        assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 11, 3).unwrap()));
    }

    #[test]
    fn test_calendar_country_lookup_is_case_insensitive() {
        let config = config();
        let nsw = Jurisdiction::new("au", "nsw").unwrap();
        let calendar = config.calendar(&nsw);
        assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()));
        assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 11, 3).unwrap()));
    }

    #[test]
    fn test_unknown_country_yields_empty_calendar() {
        let config = config();
        let nz = Jurisdiction::new("nz", "auk").unwrap();
        let calendar = config.calendar(&nz);
        assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()));
    }

    #[test]
    fn test_divisor_lookup() {
        let config = config();
        assert_eq!(
            config.accrual_rates().divisor(LeaveKind::Annual),
            Decimal::from_str("13.05714").unwrap()
        );
        assert_eq!(
            config.accrual_rates().divisor(LeaveKind::Personal),
            Decimal::from_str("26.071428").unwrap()
        );
    }

    #[test]
    fn test_policy_yaml_deserialization() {
        let yaml = r#"
metadata:
  name: Staff Leave Policy
  version: "2025-07-01"
accrual_rates:
  annual: "13.05714"
  personal: "26.071428"
"#;
        let policy: PolicyConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.metadata.name, "Staff Leave Policy");
        assert_eq!(
            policy.accrual_rates.annual,
            Decimal::from_str("13.05714").unwrap()
        );
    }

    #[test]
    fn test_holiday_table_yaml_deserialization() {
        let yaml = r#"
country: au
holidays:
  - date: 2026-01-26
    name: Australia Day
  - date: 2026-11-03
    name: Melbourne Cup Day
    region: vic
"#;
        let table: HolidayTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(table.country, "au");
        assert_eq!(table.holidays.len(), 2);
        assert_eq!(table.holidays[0].region, NATIONAL_REGION);
        assert_eq!(table.holidays[1].region, "vic");
    }
}
