//! Response types for the Benefits Engine API.
//!
//! This module defines the error response structures, the feature flag
//! response body, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::config::FeatureFlag;
use crate::error::EngineError;

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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the response for a request gated by a disabled flag.
    pub fn feature_disabled(flag: FeatureFlag) -> Self {
        Self::with_details(
            "FEATURE_DISABLED",
            format!("Feature '{}' is currently disabled", flag),
            flag.description(),
        )
    }

    /// Creates the response for an unknown flag name, listing the known ones.
    pub fn feature_flag_not_found(name: &str) -> Self {
        let available: Vec<&str> = FeatureFlag::ALL.iter().map(|flag| flag.name()).collect();
        Self::with_details(
            "FEATURE_FLAG_NOT_FOUND",
            format!("Feature flag '{}' not found", name),
            format!("Available flags: {}", available.join(", ")),
        )
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
            EngineError::InvalidArgument { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ARGUMENT",
                    format!("Invalid argument '{}': {}", field, message),
                    "The employee data contains invalid information",
                ),
            },
            EngineError::Configuration { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIGURATION_ERROR",
                    "Calculation configuration is invalid",
                    message,
                ),
            },
            EngineError::UnknownFeatureFlag { name } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::feature_flag_not_found(&name),
            },
        }
    }
}

/// Body returned for a single feature flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlagResponse {
    /// The flag's configuration key.
    pub flag_name: String,
    /// Whether the flag is on.
    pub is_enabled: bool,
    /// What the flag controls.
    pub description: String,
}

impl FeatureFlagResponse {
    /// Builds the body for `flag` in the given state.
    pub fn new(flag: FeatureFlag, is_enabled: bool) -> Self {
        Self {
            flag_name: flag.name().to_string(),
            is_enabled,
            description: flag.description().to_string(),
        }
    }
}
