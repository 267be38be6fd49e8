//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; level from config, overridable by env
//! - Metrics are cheap (atomic increments), labelled by method and status
//! - Prometheus exposition runs on its own listener, off the proxy path

pub mod logging;
pub mod metrics;
