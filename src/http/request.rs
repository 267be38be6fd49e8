//! Request identification.
//!
//! Every request gets an `x-request-id` as early as possible so log lines
//! across the forwarding path correlate. Incoming IDs are preserved.

use axum::http::{HeaderMap, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Correlation header carried through to the upstream and back.
pub const X_REQUEST_ID: &str = "x-request-id";

/// UUID v4 request ID generator for `SetRequestIdLayer`.
#[derive(Clone, Copy, Default)]
pub struct RequestUuid;

impl MakeRequestId for RequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// The request ID for logging, or "unknown" when absent.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
