//! HTTP request handlers for the leave engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::{NaiveDateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{chargeable_hours, cumulative_balances, remaining_balances};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::select_period;

use super::request::{EmploymentPeriodRequest, LeaveBalanceRequest, WorkingHoursRequest};
use super::response::{ApiError, ApiErrorResponse, LeaveBalanceResponse, WorkingHoursResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/working-hours", post(working_hours_handler))
        .route("/leave-balance", post(leave_balance_handler))
        .with_state(state)
}

/// Handler for the POST /working-hours endpoint.
///
/// Sizes a leave request: accepts the employment history, jurisdiction
/// and leave interval, and returns the chargeable hours.
async fn working_hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkingHoursRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing working-hours request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match compute_working_hours(state.config(), request) {
        Ok(response) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                chargeable_hours = %response.chargeable_hours,
                duration_us = duration.as_micros(),
                "Working-hours calculation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Working-hours calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for the POST /leave-balance endpoint.
///
/// Computes cumulative and remaining balances from the employment history
/// and the recorded usage counters.
async fn leave_balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveBalanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave-balance request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let now = Utc::now().naive_utc();
    match compute_leave_balance(state.config(), request, now) {
        Ok(response) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                remaining_annual = %response.remaining_annual,
                remaining_personal = %response.remaining_personal,
                duration_us = duration.as_micros(),
                "Leave-balance calculation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Leave-balance calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Maps a JSON extraction rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Sizes a leave request against the applicable schedule and calendar.
fn compute_working_hours(
    config: &ConfigLoader,
    request: WorkingHoursRequest,
) -> EngineResult<WorkingHoursResponse> {
    let jurisdiction = request.jurisdiction.into_jurisdiction()?;
    let interval = request.leave.into_interval()?;

    let periods = request
        .employment_history
        .into_iter()
        .map(EmploymentPeriodRequest::into_period)
        .collect::<EngineResult<Vec<_>>>()?;
    let period = select_period(&periods, interval.start, interval.end)?;

    let calendar = config.calendar(&jurisdiction);
    let hours = chargeable_hours(&interval, &period.schedule, &calendar)?;

    Ok(WorkingHoursResponse {
        chargeable_hours: hours,
    })
}

/// Computes cumulative and remaining balances as of a point in time.
fn compute_leave_balance(
    config: &ConfigLoader,
    request: LeaveBalanceRequest,
    now: NaiveDateTime,
) -> EngineResult<LeaveBalanceResponse> {
    let as_of = request.as_of.unwrap_or(now);

    let periods = request
        .employment_history
        .into_iter()
        .map(EmploymentPeriodRequest::into_period)
        .collect::<EngineResult<Vec<_>>>()?;
    let period = select_period(&periods, as_of, as_of)?;

    let cumulative = cumulative_balances(
        period.commencement_date,
        as_of,
        now,
        &period.schedule,
        request.counters.used_unpaid_leave,
        config.accrual_rates(),
    );
    let remaining = remaining_balances(
        &cumulative,
        request.counters.used_annual_leave,
        request.counters.used_personal_leave,
    );

    Ok(LeaveBalanceResponse {
        cumulative_annual: cumulative.annual,
        cumulative_personal: cumulative.personal,
        remaining_annual: remaining.annual,
        remaining_personal: remaining.personal,
    })
}
