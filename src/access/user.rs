//! User identity as seen by the permission evaluator.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::access::Department;

/// A user record held for the duration of a session.
///
/// Only the fields the evaluator needs: the superuser flag and the
/// unordered, duplicate-free set of departments the user may access.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub is_superuser: bool,

    #[serde(default)]
    pub department_access: HashSet<Department>,
}

impl User {
    /// A superuser with unconditional access.
    pub fn superuser() -> Self {
        Self {
            is_superuser: true,
            department_access: HashSet::new(),
        }
    }

    /// A regular user limited to the given departments.
    pub fn with_departments(departments: impl IntoIterator<Item = Department>) -> Self {
        Self {
            is_superuser: false,
            department_access: departments.into_iter().collect(),
        }
    }
}
