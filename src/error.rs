//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::storage::StoreError;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1002,
///     "message": "invalid postcode range: from 3000 must be <= to 2000",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`GatewayError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status               |
/// |-----------|-----------------|---------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request           |
/// | 2000–2999 | Not Found       | 404 Not Found             |
/// | 3000–3999 | Server          | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request-body or parameter schema validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The postcode range of a statistics query is inverted.
    #[error("invalid postcode range: from {from} must be <= to {to}")]
    InvalidPostcodeRange {
        /// Lower bound as supplied.
        from: i32,
        /// Upper bound as supplied.
        to: i32,
    },

    /// Both capacity bounds were supplied and the minimum exceeds the
    /// maximum.
    #[error("invalid capacity range: min {min} must be <= max {max}")]
    InvalidCapacityRange {
        /// Minimum capacity as supplied.
        min: i64,
        /// Maximum capacity as supplied.
        max: i64,
    },

    /// Malformed battery data, an empty batch, or a wrapped storage
    /// failure during create/query.
    #[error("battery data error: {0}")]
    BatteryData(String),

    /// No battery exists with the given identifier.
    #[error("battery not found: {0}")]
    BatteryNotFound(crate::domain::BatteryId),

    /// Storage collaborator failure outside the create/query paths.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::InvalidPostcodeRange { .. } => 1002,
            Self::InvalidCapacityRange { .. } => 1003,
            Self::BatteryData(_) => 1004,
            Self::BatteryNotFound(_) => 2001,
            Self::Storage(_) => 3001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_)
            | Self::InvalidPostcodeRange { .. }
            | Self::InvalidCapacityRange { .. }
            | Self::BatteryData(_) => StatusCode::BAD_REQUEST,
            Self::BatteryNotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
