//! Hop header filtering.
//!
//! # Responsibilities
//! - Strip request headers that describe the client↔gateway hop
//! - Strip response headers that describe the upstream↔gateway transport
//!
//! # Design Decisions
//! - Explicit deny-list constants rather than ad hoc comparisons
//! - `host` and `content-length` are recomputed by the HTTP client;
//!   `connection` is hop-by-hop by definition
//! - `accept-encoding` is stripped so upstreams never compress: the gateway
//!   relays body bytes untouched and removes `content-encoding`, which must
//!   never leave a compressed body unlabeled

use axum::http::{header, HeaderMap, HeaderName};

/// Request headers never forwarded upstream.
pub const REQUEST_DENYLIST: [HeaderName; 4] = [
    header::HOST,
    header::CONNECTION,
    header::CONTENT_LENGTH,
    header::ACCEPT_ENCODING,
];

/// Response headers never relayed back to the client.
pub const RESPONSE_DENYLIST: [HeaderName; 3] = [
    header::CONTENT_ENCODING,
    header::TRANSFER_ENCODING,
    header::CONNECTION,
];

/// Remove hop-specific headers from an outbound request.
pub fn filter_request_headers(headers: &mut HeaderMap) {
    for name in &REQUEST_DENYLIST {
        headers.remove(name);
    }
}

/// Remove transport-specific headers from a relayed response.
pub fn filter_response_headers(headers: &mut HeaderMap) {
    for name in &RESPONSE_DENYLIST {
        headers.remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn request_filter_strips_only_denylisted() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("erp.local"));
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("42"));
        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        filter_request_headers(&mut headers);

        assert!(headers.get(header::HOST).is_none());
        assert!(headers.get(header::CONNECTION).is_none());
        assert!(headers.get(header::CONTENT_LENGTH).is_none());
        assert!(headers.get(header::ACCEPT_ENCODING).is_none());
        assert!(headers.get(header::AUTHORIZATION).is_some());
        assert!(headers.get(header::ACCEPT).is_some());
    }

    #[test]
    fn response_filter_strips_transport_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_ENCODING, HeaderValue::from_static("gzip"));
        headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
        headers.insert(header::CONNECTION, HeaderValue::from_static("close"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        filter_response_headers(&mut headers);

        assert!(headers.get(header::CONTENT_ENCODING).is_none());
        assert!(headers.get(header::TRANSFER_ENCODING).is_none());
        assert!(headers.get(header::CONNECTION).is_none());
        assert!(headers.get(header::CONTENT_TYPE).is_some());
    }
}
