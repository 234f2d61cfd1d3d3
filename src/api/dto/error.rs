//! Error response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response format.
///
/// Every failing endpoint answers with this envelope; the optional
/// request id correlates the response with the server-side log entry.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Athlete not found")]
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with the given message.
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
            request_id: None,
        }
    }

    /// Adds a request ID to the error response for correlation.
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_error_key_only() {
        let response = ErrorResponse::new("Resource not found");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Resource not found"}));
    }

    #[test]
    fn test_serializes_request_id_when_set() {
        let response = ErrorResponse::new("Invalid token").with_request_id("req-1234");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "Invalid token");
        assert_eq!(json["request_id"], "req-1234");
    }
}
