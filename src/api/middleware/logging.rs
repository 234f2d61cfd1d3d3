//! Logging middleware for request/response tracing.
//!
//! Logs incoming requests and outgoing responses with timing information,
//! correlated through the request ID set by the request-id middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{Instrument, info, info_span};

use super::RequestId;

/// Middleware that logs request and response information.
///
/// Logs the HTTP method, path, and request ID on arrival, then the status
/// code and duration once the response is ready.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let request_id = match request.extensions().get::<RequestId>() {
        Some(id) => id.0.clone(),
        None => "unknown".to_owned(),
    };

    let span = info_span!("http_request", %method, path, %request_id);

    async move {
        info!("request received");

        let start = Instant::now();
        let response = next.run(request).await;

        info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "response sent"
        );

        response
    }
    .instrument(span)
    .await
}
