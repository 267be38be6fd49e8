//! Access decision functions.
//!
//! # Responsibilities
//! - Decide department access for a user (superuser, membership, management)
//! - Map route paths to departments via a static ordered prefix table
//!
//! # Design Decisions
//! - Ordered scan, first prefix match wins (no regex, O(n) over a small table)
//! - No match = allow: unmapped routes are public within the authenticated area
//! - Absent user always denies department access

use crate::access::{Department, User};

/// Static mapping of path prefixes to the department that owns them.
///
/// Covers the dashboard pages and the corresponding backend API prefixes.
/// Scanned in order; the first matching prefix decides.
pub const ROUTE_DEPARTMENTS: &[(&str, Department)] = &[
    ("/dashboard/erp/clients", Department::ClientInfo),
    ("/dashboard/erp/samples", Department::SampleDepartment),
    ("/dashboard/erp/merchandising", Department::Merchandising),
    ("/dashboard/erp/orders", Department::Orders),
    ("/dashboard/erp/production", Department::Production),
    ("/dashboard/erp/inventory", Department::Inventory),
    ("/dashboard/erp/reports", Department::Reports),
    ("/dashboard/erp/users", Department::UserManagement),
    ("/dashboard/erp/settings", Department::BasicSettings),
    ("/api/v1/clients", Department::ClientInfo),
    ("/api/v1/samples", Department::SampleDepartment),
    ("/api/v1/merchandising", Department::Merchandising),
    ("/api/v1/orders", Department::Orders),
    ("/api/v1/production", Department::Production),
    ("/api/v1/inventory", Department::Inventory),
    ("/api/v1/reports", Department::Reports),
    ("/api/v1/users", Department::UserManagement),
    ("/api/v1/settings", Department::BasicSettings),
];

/// Decide whether `user` may access `department`.
///
/// Superusers may access everything. User management is superuser-only:
/// membership in the access set does not grant it. No user means deny.
pub fn has_access(user: Option<&User>, department: Department) -> bool {
    let Some(user) = user else {
        return false;
    };
    if user.is_superuser {
        return true;
    }
    if department == Department::UserManagement {
        return false;
    }
    user.department_access.contains(&department)
}

/// Decide whether `user` may access the resource at `path`.
///
/// The first matching prefix in [`ROUTE_DEPARTMENTS`] defers to
/// [`has_access`]; paths with no mapped prefix are allowed.
pub fn can_access_route(user: Option<&User>, path: &str) -> bool {
    match ROUTE_DEPARTMENTS
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix))
    {
        Some((_, department)) => has_access(user, *department),
        None => true,
    }
}
