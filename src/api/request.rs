//! Request types for the leave engine API.
//!
//! This module defines the JSON request structures for the
//! `/working-hours` and `/leave-balance` endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{
    EmploymentPeriod, Jurisdiction, LeaveBalanceCounters, LeaveInterval, WorkingScheduleEntry,
};

/// Request body for the `/working-hours` endpoint.
///
/// Contains the employee's employment history, the jurisdiction for
/// holiday lookup, and the leave interval to size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHoursRequest {
    /// The employee's employment periods, as recorded by HR.
    pub employment_history: Vec<EmploymentPeriodRequest>,
    /// The jurisdiction whose public holidays apply.
    pub jurisdiction: JurisdictionRequest,
    /// The leave interval being requested.
    pub leave: LeaveIntervalRequest,
}

/// Request body for the `/leave-balance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveBalanceRequest {
    /// The employee's employment periods, as recorded by HR.
    pub employment_history: Vec<EmploymentPeriodRequest>,
    /// The instant to compute balances at; defaults to now.
    #[serde(default)]
    pub as_of: Option<NaiveDateTime>,
    /// The employee's recorded leave-usage counters.
    #[serde(default)]
    pub counters: LeaveBalanceCounters,
}

/// One employment period in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmploymentPeriodRequest {
    /// When this period's schedule took effect.
    pub commencement_date: NaiveDateTime,
    /// When this period was superseded; absent for the current period.
    #[serde(default)]
    pub end_date: Option<NaiveDateTime>,
    /// Per-weekday schedule entries.
    pub working_days: Vec<WorkingScheduleEntry>,
}

/// Jurisdiction information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JurisdictionRequest {
    /// Country abbreviation (e.g. "au").
    pub country: String,
    /// Region abbreviation within the country (e.g. "vic").
    pub region: String,
}

/// Leave interval boundaries in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveIntervalRequest {
    /// The first instant of the leave period.
    pub start: NaiveDateTime,
    /// The last instant of the leave period.
    pub end: NaiveDateTime,
}

impl EmploymentPeriodRequest {
    /// Validates the raw record into a domain employment period.
    pub fn into_period(self) -> EngineResult<EmploymentPeriod> {
        crate::models::EmploymentRecord {
            commencement_date: self.commencement_date,
            end_date: self.end_date,
            working_days: self.working_days,
        }
        .try_into()
    }
}

impl JurisdictionRequest {
    /// Validates the request pair into a domain jurisdiction.
    pub fn into_jurisdiction(self) -> EngineResult<Jurisdiction> {
        Jurisdiction::new(self.country, self.region)
    }
}

impl LeaveIntervalRequest {
    /// Validates the boundaries into a domain leave interval.
    pub fn into_interval(self) -> EngineResult<LeaveInterval> {
        LeaveInterval::new(self.start, self.end)
    }
}
