//! ERP API Gateway Library
//!
//! Forwards dashboard traffic to the ERP backend and evaluates
//! department-level access for route-scoped resources.

pub mod access;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proxy;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
