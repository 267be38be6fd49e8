//! HTTP surface of the gateway.
//!
//! # Data Flow
//! ```text
//! Client request
//!     → server.rs (Axum setup, layers: request ID, trace, body limit)
//!     → middleware/ (optional department gate)
//!     → proxy::Forwarder (rewrite + send upstream)
//!     → response.rs (error mapping, JSON bodies)
//!     → Client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
