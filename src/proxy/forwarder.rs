//! Single-hop request forwarding to the ERP backend.
//!
//! # Responsibilities
//! - Rewrite the inbound URI onto the configured upstream base
//! - Forward method, headers (filtered), and body via a shared client
//! - Bound the wait with a timeout; cancel the call when it fires
//! - Classify failures as timeout vs unavailable
//!
//! # Design Decisions
//! - The upstream target is precompiled (scheme/authority/base path) so the
//!   hot path never re-parses the configured URL
//! - GET/HEAD are forwarded without a body
//! - Success relays status and body untouched

use std::time::Duration;

use axum::body::Body;
use axum::http::uri::{Authority, Scheme};
use axum::http::{Method, Request, Response, Uri};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use url::Url;

use crate::config::schema::UpstreamConfig;
use crate::proxy::headers;

/// Failure at the forwarding boundary. Exactly two kinds.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// The upstream did not respond within the configured window. The
    /// operation may still have completed on the backend.
    #[error("upstream did not respond before the deadline")]
    Timeout,

    /// Any other forwarding failure: connection refused, DNS failure,
    /// malformed rewrite target.
    #[error("upstream unavailable: {0}")]
    Unavailable(String),
}

/// Error building an [`UpstreamTarget`] from configuration.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("invalid upstream base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("upstream scheme must be http, got {0:?}")]
    UnsupportedScheme(String),
}

/// The compiled destination for forwarded requests.
#[derive(Debug, Clone)]
pub struct UpstreamTarget {
    scheme: Scheme,
    authority: Authority,
    base_path: String,
    timeout: Duration,
}

impl UpstreamTarget {
    /// Compile the configured base URL into URI parts.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let invalid = |reason: String| UpstreamError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason,
        };

        let url = Url::parse(&config.base_url).map_err(|e| invalid(e.to_string()))?;
        // The outbound connector speaks plain HTTP only; an https target
        // would pass startup and then fail on every forward.
        match url.scheme() {
            "http" => {}
            other => return Err(UpstreamError::UnsupportedScheme(other.to_string())),
        }

        let scheme = Scheme::try_from(url.scheme()).map_err(|e| invalid(e.to_string()))?;
        let authority =
            Authority::try_from(url.authority()).map_err(|e| invalid(e.to_string()))?;
        let base_path = url.path().trim_end_matches('/').to_string();

        Ok(Self {
            scheme,
            authority,
            base_path,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// How long to wait for the upstream before giving up.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Rewrite an inbound URI onto this target, keeping path and query.
    fn uri_for(&self, inbound: &Uri) -> Result<Uri, axum::http::Error> {
        let path_and_query = inbound
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        let rewritten = if self.base_path.is_empty() {
            path_and_query.to_string()
        } else {
            format!("{}{}", self.base_path, path_and_query)
        };

        Uri::builder()
            .scheme(self.scheme.clone())
            .authority(self.authority.clone())
            .path_and_query(rewritten)
            .build()
    }
}

/// Shared HTTP client for outbound calls.
pub struct Forwarder {
    client: Client<HttpConnector, Body>,
}

impl Forwarder {
    /// Create a forwarder with the given connection-establishment timeout.
    pub fn new(connect_timeout: Duration) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(connect_timeout));
        let client = Client::builder(TokioExecutor::new()).build(connector);
        Self { client }
    }

    /// Forward `request` to `target` and relay the response.
    ///
    /// On timeout the in-flight call is dropped, which cancels the outbound
    /// connection. No retries are attempted.
    pub async fn forward(
        &self,
        target: &UpstreamTarget,
        request: Request<Body>,
    ) -> Result<Response<Body>, ForwardError> {
        let (mut parts, body) = request.into_parts();

        headers::filter_request_headers(&mut parts.headers);
        parts.uri = target
            .uri_for(&parts.uri)
            .map_err(|e| ForwardError::Unavailable(e.to_string()))?;

        let body = if parts.method == Method::GET || parts.method == Method::HEAD {
            Body::empty()
        } else {
            body
        };
        let outbound = Request::from_parts(parts, body);

        let response = match tokio::time::timeout(target.timeout, self.client.request(outbound))
            .await
        {
            Err(_elapsed) => return Err(ForwardError::Timeout),
            Ok(Err(e)) => return Err(ForwardError::Unavailable(e.to_string())),
            Ok(Ok(response)) => response,
        };

        let (mut parts, body) = response.into_parts();
        headers::filter_response_headers(&mut parts.headers);
        Ok(Response::from_parts(parts, Body::new(body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(base_url: &str) -> UpstreamTarget {
        UpstreamTarget::from_config(&UpstreamConfig {
            base_url: base_url.to_string(),
            ..UpstreamConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn rewrites_path_and_query_onto_upstream() {
        let target = target("http://backend:8000");
        let inbound: Uri = "http://gateway.local/api/v1/styles?page=2".parse().unwrap();

        let uri = target.uri_for(&inbound).unwrap();
        assert_eq!(uri.to_string(), "http://backend:8000/api/v1/styles?page=2");
    }

    #[test]
    fn joins_upstream_base_path() {
        let target = target("http://backend:8000/erp/");
        let inbound: Uri = "http://gateway.local/api/v1/orders".parse().unwrap();

        let uri = target.uri_for(&inbound).unwrap();
        assert_eq!(uri.to_string(), "http://backend:8000/erp/api/v1/orders");
    }

    #[test]
    fn rejects_non_http_schemes() {
        for base_url in ["ftp://backend:21", "https://backend:8443"] {
            let err = UpstreamTarget::from_config(&UpstreamConfig {
                base_url: base_url.to_string(),
                ..UpstreamConfig::default()
            })
            .unwrap_err();
            assert!(
                matches!(err, UpstreamError::UnsupportedScheme(_)),
                "{base_url} accepted"
            );
        }
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = UpstreamTarget::from_config(&UpstreamConfig {
            base_url: "not a url".to_string(),
            ..UpstreamConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, UpstreamError::InvalidBaseUrl { .. }));
    }
}
