//! Department gate middleware.
//!
//! Optional server-side enforcement of the route access table. The auth tier
//! in front of the gateway resolves the session and passes the identity down
//! as headers; absent headers mean no user, which denies mapped routes.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::access::{can_access_route, Department, User};
use crate::http::response::{error_response, FORBIDDEN_DETAIL};
use crate::http::server::AppState;

/// Identity header: "true"/"1" marks a superuser session.
pub const X_USER_SUPERUSER: &str = "x-user-superuser";

/// Identity header: comma-separated department identifiers.
pub const X_USER_DEPARTMENTS: &str = "x-user-departments";

/// Reconstruct the session user from identity headers.
///
/// Returns `None` when neither header is present. Identifiers outside the
/// department enumeration are skipped; they can never match a mapped route.
pub fn user_from_headers(headers: &HeaderMap) -> Option<User> {
    let superuser = headers.get(X_USER_SUPERUSER);
    let departments = headers.get(X_USER_DEPARTMENTS);
    if superuser.is_none() && departments.is_none() {
        return None;
    }

    let is_superuser = superuser
        .and_then(|v| v.to_str().ok())
        .map(|v| matches!(v.trim(), "true" | "1"))
        .unwrap_or(false);

    let department_access = departments
        .and_then(|v| v.to_str().ok())
        .map(|v| {
            v.split(',')
                .filter_map(|s| s.trim().parse::<Department>().ok())
                .collect()
        })
        .unwrap_or_default();

    Some(User {
        is_superuser,
        department_access,
    })
}

/// Deny forwarded requests whose path maps to a department the user lacks.
///
/// Passthrough when enforcement is disabled (the dashboard evaluates
/// permissions itself in that mode).
pub async fn department_gate(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !state.runtime.load().config.access.enforce {
        return next.run(req).await;
    }

    let user = user_from_headers(req.headers());
    let path = req.uri().path();
    if can_access_route(user.as_ref(), path) {
        next.run(req).await
    } else {
        tracing::warn!(path = %path, "Department access denied");
        error_response(StatusCode::FORBIDDEN, FORBIDDEN_DETAIL)
    }
}
