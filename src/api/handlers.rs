//! HTTP request handlers for the vacation pay API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate;

use super::request::VacationQuery;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// `/calculacte` is the path published by earlier releases and is kept as an
/// alias of `/calculate`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", get(calculate_handler))
        .route("/calculacte", get(calculate_handler))
        .with_state(state)
}

/// Handler for GET /calculate endpoint.
///
/// Validates the query, selects the calculation mode and returns the payout
/// as a bare JSON integer.
async fn calculate_handler(
    State(state): State<AppState>,
    query: Result<Query<VacationQuery>, QueryRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing vacation pay request");

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Malformed query string"
            );
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::malformed_query(rejection.body_text()),
            }
            .into_response();
        }
    };

    let request = match query.resolve() {
        Ok(request) => request,
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            warn!(
                correlation_id = %correlation_id,
                code = %api_error.error.code,
                error = %api_error.error.message,
                "Vacation pay request rejected"
            );
            return api_error.into_response();
        }
    };

    let start_time = Instant::now();
    let result = calculate(request.average_salary, &request.mode, state.calendar());
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        mode = %result.mode,
        total_days = result.total_days,
        holiday_days = result.holiday_days,
        paid_days = result.paid_days,
        daily_rate = %result.daily_rate,
        amount = result.amount,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    (StatusCode::OK, Json(result.amount)).into_response()
}
