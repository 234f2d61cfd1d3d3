//! Health check and service index handlers.
//!
//! Both services expose a fixed-shape health payload; the CMS additionally
//! serves an index of its route groups at the API root.

use axum::Json;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::HEALTH_TAG;
use crate::api::dto::{ApiIndexResponse, CmsHealthResponse, StoreHealthResponse};
use crate::state::{CmsState, StoreState};

/// Creates the app store health routes.
///
/// # Routes
/// - `GET /health` - Basic health check
pub fn store_health_routes() -> OpenApiRouter<StoreState> {
    OpenApiRouter::new().routes(routes!(store_health))
}

/// Creates the CMS root routes.
///
/// # Routes
/// - `GET /health` - Basic health check
/// - `GET /api/v1` - Route group index
pub fn cms_root_routes() -> OpenApiRouter<CmsState> {
    OpenApiRouter::new()
        .routes(routes!(cms_health))
        .routes(routes!(api_index))
}

/// GET /api/health - App store health check
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = StoreHealthResponse)
    )
)]
async fn store_health() -> Json<StoreHealthResponse> {
    Json(StoreHealthResponse::ok())
}

/// GET /health - CMS health check
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = CmsHealthResponse)
    )
)]
async fn cms_health() -> Json<CmsHealthResponse> {
    Json(CmsHealthResponse::healthy())
}

/// GET /api/v1 - CMS route group index
#[utoipa::path(
    get,
    path = "/api/v1",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service index", body = ApiIndexResponse)
    )
)]
async fn api_index() -> Json<ApiIndexResponse> {
    Json(ApiIndexResponse::current())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_health_payload() {
        let Json(response) = store_health().await;
        assert_eq!(response.status, "ok");
    }

    #[tokio::test]
    async fn test_cms_health_payload() {
        let Json(response) = cms_health().await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.service, "Dunes CMS API");
    }

    #[tokio::test]
    async fn test_api_index_payload() {
        let Json(response) = api_index().await;
        assert_eq!(response.status, "operational");
        assert!(response.endpoints.contains_key("athletes"));
    }
}
