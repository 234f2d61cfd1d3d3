//! Request ID middleware for request tracing.
//!
//! Every request gets a unique identifier for log correlation: either the
//! caller's X-Request-ID header or a freshly generated UUID.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Header name for request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID stored in request extensions for downstream access.
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

impl RequestId {
    fn from_headers(request: &Request) -> Self {
        let id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        RequestId(id)
    }
}

/// Middleware that ensures every request has a unique request ID.
///
/// Uses the incoming X-Request-ID header value when present, otherwise
/// generates a UUID v4. The ID is stored in request extensions and echoed
/// back on the response headers.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_headers(&request);
    let echo = HeaderValue::from_str(&request_id.0).ok();
    request.extensions_mut().insert(request_id);

    let mut response = next.run(request).await;

    if let Some(value) = echo {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_uuid_when_header_absent() {
        let request = Request::builder().body(axum::body::Body::empty()).unwrap();
        let id = RequestId::from_headers(&request);
        assert!(Uuid::parse_str(&id.0).is_ok());
    }

    #[test]
    fn reuses_caller_supplied_header() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "trace-42")
            .body(axum::body::Body::empty())
            .unwrap();
        let id = RequestId::from_headers(&request);
        assert_eq!(id.0, "trace-42");
    }
}
