//! Public holiday models and the calendar lookup trait.
//!
//! Holiday data is external configuration: tables are published per
//! country, with entries scoped to a region or marked national. The
//! engine consults them read-only through the [`HolidayCalendar`] trait.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The region entries use when a holiday applies country-wide.
pub const NATIONAL_REGION: &str = "national";

/// A (country, region) abbreviation pair keying holiday lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jurisdiction {
    /// Country abbreviation (e.g. "au").
    pub country: String,
    /// Region abbreviation within the country (e.g. "vic", "nsw").
    pub region: String,
}

impl Jurisdiction {
    /// Creates a jurisdiction, rejecting blank components.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingJurisdiction`] if either abbreviation
    /// is empty or whitespace.
    pub fn new(country: impl Into<String>, region: impl Into<String>) -> EngineResult<Self> {
        let country = country.into();
        let region = region.into();
        if country.trim().is_empty() || region.trim().is_empty() {
            return Err(EngineError::MissingJurisdiction);
        }
        Ok(Self { country, region })
    }
}

/// A single public holiday within a jurisdiction's table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g. "Australia Day").
    pub name: String,
    /// The region the holiday applies to, or "national".
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    NATIONAL_REGION.to_string()
}

/// Jurisdiction-keyed holiday lookup.
///
/// Implementations are pure and read-only; holiday data for a
/// jurisdiction and year is immutable once published, so lookups may be
/// cached freely.
pub trait HolidayCalendar {
    /// Returns true if the date is a public holiday in this calendar's
    /// jurisdiction.
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// A holiday calendar materialized for one jurisdiction.
///
/// Built from a country table by keeping national entries plus the
/// entries for the queried region.
#[derive(Debug, Clone, Default)]
pub struct RegionalHolidayCalendar {
    dates: HashSet<NaiveDate>,
}

impl RegionalHolidayCalendar {
    /// Builds a calendar from the holidays applicable to `jurisdiction`.
    ///
    /// Region matching is case-insensitive; entries marked
    /// [`NATIONAL_REGION`] always apply.
    pub fn for_jurisdiction<'a>(
        holidays: impl IntoIterator<Item = &'a PublicHoliday>,
        jurisdiction: &Jurisdiction,
    ) -> Self {
        let dates = holidays
            .into_iter()
            .filter(|holiday| {
                holiday.region == NATIONAL_REGION
                    || holiday.region.eq_ignore_ascii_case(&jurisdiction.region)
            })
            .map(|holiday| holiday.date)
            .collect();
        Self { dates }
    }

    /// Builds a calendar directly from dates.
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }
}

impl HolidayCalendar for RegionalHolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}
