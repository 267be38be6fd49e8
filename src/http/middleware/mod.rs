//! Gateway middleware.

pub mod department;

pub use department::{department_gate, user_from_headers, X_USER_DEPARTMENTS, X_USER_SUPERUSER};
