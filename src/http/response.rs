//! Error response mapping.
//!
//! Forwarding failures surface as structured JSON bodies with a `detail`
//! field; nothing else escapes the boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::proxy::ForwardError;

/// Body detail for an upstream that did not respond in time. The caller may
/// retry, but the backend may already have applied the operation.
pub const TIMEOUT_DETAIL: &str = "Request timeout - operation may have completed";

/// Body detail for an upstream that could not be reached at all.
pub const UNAVAILABLE_DETAIL: &str = "Backend service unavailable";

/// Body detail for a department-gate denial.
pub const FORBIDDEN_DETAIL: &str = "Department access denied";

/// Build a `{"detail": ...}` error response.
pub fn error_response(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        match self {
            ForwardError::Timeout => {
                error_response(StatusCode::GATEWAY_TIMEOUT, TIMEOUT_DETAIL)
            }
            ForwardError::Unavailable(_) => {
                error_response(StatusCode::SERVICE_UNAVAILABLE, UNAVAILABLE_DETAIL)
            }
        }
    }
}
