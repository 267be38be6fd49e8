//! The fixed set of business areas used as units of access control.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A business area of the ERP. Static; never created or destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    ClientInfo,
    SampleDepartment,
    Merchandising,
    Orders,
    Production,
    Inventory,
    Reports,
    UserManagement,
    BasicSettings,
}

impl Department {
    /// All departments, in dashboard menu order.
    pub const ALL: [Department; 9] = [
        Department::ClientInfo,
        Department::SampleDepartment,
        Department::Merchandising,
        Department::Orders,
        Department::Production,
        Department::Inventory,
        Department::Reports,
        Department::UserManagement,
        Department::BasicSettings,
    ];

    /// Stable identifier used in headers, config, and API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::ClientInfo => "client_info",
            Department::SampleDepartment => "sample_department",
            Department::Merchandising => "merchandising",
            Department::Orders => "orders",
            Department::Production => "production",
            Department::Inventory => "inventory",
            Department::Reports => "reports",
            Department::UserManagement => "user_management",
            Department::BasicSettings => "basic_settings",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for identifiers outside the fixed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown department identifier: {0}")]
pub struct UnknownDepartment(pub String);

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client_info" => Ok(Department::ClientInfo),
            "sample_department" => Ok(Department::SampleDepartment),
            "merchandising" => Ok(Department::Merchandising),
            "orders" => Ok(Department::Orders),
            "production" => Ok(Department::Production),
            "inventory" => Ok(Department::Inventory),
            "reports" => Ok(Department::Reports),
            "user_management" => Ok(Department::UserManagement),
            "basic_settings" => Ok(Department::BasicSettings),
            other => Err(UnknownDepartment(other.to_string())),
        }
    }
}
