//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check the upstream base URL is a usable plain-http target
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("upstream.base_url {0:?} is not a valid URL")]
    InvalidUpstreamUrl(String),

    #[error("upstream.base_url scheme must be http, got {0:?}")]
    UnsupportedUpstreamScheme(String),

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("security.max_body_size must be greater than zero")]
    ZeroBodyLimit,

    #[error("observability.metrics_address {0:?} is not a valid socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) => {
            // The forwarder's connector speaks plain HTTP only.
            if url.scheme() != "http" {
                errors.push(ValidationError::UnsupportedUpstreamScheme(
                    url.scheme().to_string(),
                ));
            }
        }
        Err(_) => {
            errors.push(ValidationError::InvalidUpstreamUrl(
                config.upstream.base_url.clone(),
            ));
        }
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration("upstream.timeout_secs"));
    }
    if config.upstream.connect_secs == 0 {
        errors.push(ValidationError::ZeroDuration("upstream.connect_secs"));
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
