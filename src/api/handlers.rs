//! HTTP request handlers for the Benefits Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_paycheck_as_of;
use crate::config::FeatureFlag;
use crate::models::EmployeeSnapshot;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, FeatureFlagResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/feature-flags", get(list_feature_flags_handler))
        .route("/feature-flags/:name", get(get_feature_flag_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts an employee snapshot and returns the calculated paycheck. Dependent
/// ages are taken on `asOf` when given, otherwise on today's local date.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing paycheck calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
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
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let config = state.config();
    if !config.is_enabled(FeatureFlag::EnablePaycheckCalculation) {
        warn!(
            correlation_id = %correlation_id,
            flag = %FeatureFlag::EnablePaycheckCalculation,
            "Paycheck calculation is disabled"
        );
        return json_response(
            StatusCode::FORBIDDEN,
            ApiError::feature_disabled(FeatureFlag::EnablePaycheckCalculation),
        );
    }

    // Flags are read once so a single calculation never sees a mix of states.
    let toggles = config.toggles();
    let as_of = request.as_of.unwrap_or_else(|| Local::now().date_naive());
    let employee: EmployeeSnapshot = request.employee.into();

    let start_time = Instant::now();
    match calculate_paycheck_as_of(&employee, config.calculation(), &toggles, as_of) {
        Ok(paycheck) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = employee.id,
                dependents_count = employee.dependents.len(),
                gross_pay = %paycheck.gross_pay,
                net_pay = %paycheck.net_pay,
                duration_us = start_time.elapsed().as_micros(),
                "Paycheck calculated successfully"
            );
            json_response(StatusCode::OK, paycheck)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = employee.id,
                error = %err,
                "Paycheck calculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for GET /feature-flags endpoint.
///
/// Returns every known flag with its state, keyed by name.
async fn list_feature_flags_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().flags().all())
}

/// Handler for GET /feature-flags/{name} endpoint.
async fn get_feature_flag_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    match state.config().flags().get_by_name(&name) {
        Ok((flag, is_enabled)) => {
            json_response(StatusCode::OK, FeatureFlagResponse::new(flag, is_enabled))
        }
        Err(err) => {
            warn!(flag = %name, "Unknown feature flag requested");
            error_response(err.into())
        }
    }
}
