//! Health check and service index DTOs.

use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Health check response for the app store API.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({"status": "ok"}))]
pub struct StoreHealthResponse {
    /// Overall service status
    #[schema(example = "ok")]
    pub status: &'static str,
}

impl StoreHealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Health check response for the CMS API.
#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({
    "status": "healthy",
    "service": "Dunes CMS API",
    "version": "1.0.0"
}))]
pub struct CmsHealthResponse {
    /// Overall service status
    #[schema(example = "healthy")]
    pub status: &'static str,
    /// Service identity
    #[schema(example = "Dunes CMS API")]
    pub service: &'static str,
    /// Service version
    #[schema(example = "1.0.0")]
    pub version: &'static str,
}

impl CmsHealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            service: "Dunes CMS API",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Index of the CMS route groups, served at the API root.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiIndexResponse {
    /// Service identity
    #[schema(example = "Dunes Be One Basketball CMS")]
    pub service: &'static str,
    /// Service version
    #[schema(example = "1.0.0")]
    pub version: &'static str,
    /// Operational status
    #[schema(example = "operational")]
    pub status: &'static str,
    /// Route group name to base path
    pub endpoints: HashMap<&'static str, &'static str>,
}

impl ApiIndexResponse {
    /// Builds the route-group index for the CMS service.
    pub fn current() -> Self {
        let endpoints = HashMap::from([
            ("authentication", "/api/v1/auth"),
            ("athletes", "/api/v1/athletes"),
            ("coaches", "/api/v1/coaches"),
            ("clubs", "/api/v1/clubs"),
            ("games", "/api/v1/games"),
            ("training", "/api/v1/training"),
            ("statistics", "/api/v1/statistics"),
            ("news", "/api/v1/news"),
        ]);

        Self {
            service: "Dunes Be One Basketball CMS",
            version: env!("CARGO_PKG_VERSION"),
            status: "operational",
            endpoints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_health_shape() {
        let json = serde_json::to_value(StoreHealthResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "ok"}));
    }

    #[test]
    fn test_cms_health_shape() {
        let json = serde_json::to_value(CmsHealthResponse::healthy()).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "Dunes CMS API");
        assert_eq!(json["version"], "1.0.0");
    }

    #[test]
    fn test_api_index_lists_route_groups() {
        let index = ApiIndexResponse::current();
        assert_eq!(index.status, "operational");
        assert_eq!(index.endpoints["authentication"], "/api/v1/auth");
        assert_eq!(index.endpoints["clubs"], "/api/v1/clubs");
        assert_eq!(index.endpoints.len(), 8);
    }
}
