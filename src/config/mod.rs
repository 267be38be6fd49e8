//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! gateway.toml
//!     → loader.rs (read, parse)
//!     → validation.rs (semantic checks, all errors reported)
//!     → Accepted GatewayConfig
//!
//! Hot reload:
//!     watcher.rs (notify) → loader.rs → mpsc channel → server swaps state
//! ```
//!
//! # Design Decisions
//! - Every section has defaults; an empty file is a valid config
//! - Validation runs before a config is accepted, on load and on reload
//! - A failed reload keeps the current configuration

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use schema::GatewayConfig;
