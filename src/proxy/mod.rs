//! Request forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request (method, path, query, headers, body)
//!     → headers.rs (strip hop-specific request headers)
//!     → forwarder.rs (rewrite URI to upstream, bounded send)
//!     → headers.rs (strip transport-specific response headers)
//!     → Relay status + body to client
//! ```
//!
//! # Design Decisions
//! - Single hop, stateless per request, no automatic retries
//! - Exactly two failure kinds: upstream timeout and upstream unavailable
//! - Timeout cancels the outbound call (the in-flight future is dropped)
//! - Header filtering is an explicit deny list, auditable in one place

pub mod forwarder;
pub mod headers;

pub use forwarder::{ForwardError, Forwarder, UpstreamTarget};
