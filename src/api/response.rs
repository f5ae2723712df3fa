//! Response types for the leave engine API.
//!
//! This module defines the success and error response structures and the
//! mapping from engine errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Response body for the `/working-hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHoursResponse {
    /// Hours the leave interval would consume from the balance.
    pub chargeable_hours: Decimal,
}

/// Response body for the `/leave-balance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveBalanceResponse {
    /// Hours of annual leave accrued over the employment span.
    pub cumulative_annual: Decimal,
    /// Hours of personal leave accrued over the employment span.
    pub cumulative_personal: Decimal,
    /// Hours of annual leave remaining after recorded usage.
    pub remaining_annual: Decimal,
    /// Hours of personal leave remaining after recorded usage.
    pub remaining_personal: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidTimeFormat { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME_FORMAT",
                    format!("Invalid time of day '{}'", value),
                    "Schedule times must be wall-clock values in HH:MM form",
                ),
            },
            EngineError::InvalidScheduleEntry { weekday, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SCHEDULE_ENTRY",
                    format!("Invalid schedule entry for weekday {}: {}", weekday, message),
                    "The employment record's working-day entries are inconsistent",
                ),
            },
            EngineError::InvalidDateRange { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    format!("Invalid date range: end {} is not after start {}", end, start),
                    "The leave interval must end after it starts",
                ),
            },
            EngineError::NoApplicableSchedule { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NO_APPLICABLE_SCHEDULE",
                    format!("No employment period covers the window {} to {}", start, end),
                    "A window straddling a schedule change must be split per period",
                ),
            },
            EngineError::MissingJurisdiction => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "MISSING_JURISDICTION",
                    "A country and region are required for holiday lookup",
                ),
            },
        }
    }
}
