//! Response types for the vacation pay API.
//!
//! This module defines the error response structures and the mapping from
//! [`VacationError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::VacationError;

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

    /// Creates a malformed query error response.
    pub fn malformed_query(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_QUERY", message)
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

/// Returns the stable machine-readable code for an error.
fn error_code(error: &VacationError) -> &'static str {
    match error {
        VacationError::ConfigNotFound { .. } | VacationError::ConfigParseError { .. } => {
            "CONFIG_ERROR"
        }
        VacationError::MissingRequiredField { .. } => "MISSING_REQUIRED_FIELD",
        VacationError::NotANumber { .. } => "NOT_A_NUMBER",
        VacationError::NotADate { .. } => "NOT_A_DATE",
        VacationError::SalaryOutOfRange { .. } => "SALARY_OUT_OF_RANGE",
        VacationError::DaysOutOfRange { .. } => "DAYS_OUT_OF_RANGE",
        VacationError::AmbiguousOrMissingMode { .. } => "AMBIGUOUS_OR_MISSING_MODE",
        VacationError::InvalidDateOrder { .. } => "INVALID_DATE_ORDER",
    }
}

impl From<VacationError> for ApiErrorResponse {
    fn from(error: VacationError) -> Self {
        let code = error_code(&error);
        match error {
            VacationError::ConfigNotFound { .. } | VacationError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(code, "Configuration error", error.to_string()),
                }
            }
            VacationError::MissingRequiredField { ref field } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    code,
                    error.to_string(),
                    format!("Required query parameter '{}' was not provided", field),
                ),
            },
            _ => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(code, error.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModeConflict;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_missing_field_maps_to_bad_request() {
        let response: ApiErrorResponse = VacationError::MissingRequiredField {
            field: "averageSalary".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "MISSING_REQUIRED_FIELD");
        assert!(response.error.message.contains("averageSalary"));
        assert!(response.error.details.is_some());
    }

    #[test]
    fn test_range_error_message_carries_bounds() {
        let response: ApiErrorResponse = VacationError::DaysOutOfRange {
            min: 1,
            max: 366,
            value: 400,
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "DAYS_OUT_OF_RANGE");
        assert!(response.error.message.contains("400"));
    }

    #[test]
    fn test_mode_conflict_maps_to_bad_request() {
        let response: ApiErrorResponse = VacationError::AmbiguousOrMissingMode {
            conflict: ModeConflict::Ambiguous,
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "AMBIGUOUS_OR_MISSING_MODE");
    }

    #[test]
    fn test_config_error_maps_to_internal_server_error() {
        let response: ApiErrorResponse = VacationError::ConfigNotFound {
            path: "/missing".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
    }
}
