//! Department access control subsystem.
//!
//! # Data Flow
//! ```text
//! Identity (superuser flag + department set)
//!     → policy.rs (has_access / can_access_route)
//!     → Allow or Deny
//!
//! Route table (compile time):
//!     path prefix → Department, scanned in order, first match wins
//! ```
//!
//! # Design Decisions
//! - Departments are a closed enum; identifiers outside it never match
//! - Decisions are pure functions of (user, path): no caching, no mutation
//! - Unmapped paths default to allow (public within the authenticated area)
//! - User management is superuser-only regardless of the access set

pub mod department;
pub mod policy;
pub mod user;

pub use department::Department;
pub use policy::{can_access_route, has_access, ROUTE_DEPARTMENTS};
pub use user::User;
