// ABOUTME: Request ID middleware for correlating logs and responses
// ABOUTME: Reuses a well-formed incoming x-request-id or generates a UUID v4, then echoes it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Goal Paces Contributors

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use goal_paces_core::constants::headers::REQUEST_ID;
use tracing::Instrument;
use uuid::Uuid;

const MAX_INCOMING_ID_LEN: usize = 128;

/// Request identifier stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh UUID v4 identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_header(value: &HeaderValue) -> Option<Self> {
        let raw = value.to_str().ok()?;
        let acceptable = !raw.is_empty()
            && raw.len() <= MAX_INCOMING_ID_LEN
            && raw.bytes().all(|b| b.is_ascii_graphic());
        acceptable.then(|| Self(raw.to_owned()))
    }
}

/// Attach a [`RequestId`] to the request, run the handler inside a span
/// carrying it, and echo it in the `x-request-id` response header.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID)
        .and_then(RequestId::from_header)
        .unwrap_or_else(RequestId::generate);

    request.extensions_mut().insert(request_id.clone());

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id.as_str(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID), value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incoming_id_accepted_when_well_formed() {
        let value = HeaderValue::from_static("client-abc-123");
        assert_eq!(
            RequestId::from_header(&value).map(|id| id.0),
            Some("client-abc-123".to_owned())
        );
    }

    #[test]
    fn test_incoming_id_rejected_when_oversized_or_blank() {
        let long = "a".repeat(MAX_INCOMING_ID_LEN + 1);
        let value = HeaderValue::from_str(&long).ok();
        assert!(value.and_then(|v| RequestId::from_header(&v)).is_none());
        assert!(RequestId::from_header(&HeaderValue::from_static("")).is_none());
        assert!(RequestId::from_header(&HeaderValue::from_static("has space")).is_none());
    }
}
