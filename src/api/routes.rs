//! Router configuration for both API binaries.
//!
//! This module provides centralized route registration, OpenAPI document
//! assembly, and middleware configuration for the store and CMS services.

use axum::http::StatusCode;
use axum::{Json, Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::{CmsApiDoc, StoreApiDoc};
use crate::api::dto::ErrorResponse;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::{CmsState, StoreState};

/// Creates the app store router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware (runs second) - logs requests with request IDs
/// 3. CORS (permissive, mirrors the browser clients this API serves)
///
/// # Routes
/// - `/api/health` - Liveness check
/// - `/api/apps` - App catalog
/// - `/api/versions` - Latest published version lookup
/// - `/api/auth` - Placeholder token endpoints
/// - `/docs` - Swagger UI over the generated OpenAPI document
pub fn create_store_router(state: StoreState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(StoreApiDoc::openapi())
        .nest("/api", handlers::health::store_health_routes())
        .nest("/api/apps", handlers::apps::app_routes())
        .nest("/api/versions", handlers::versions::version_routes())
        .nest("/api/auth", handlers::store_auth::store_auth_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        // Middleware is applied in reverse order - last added runs first
        // So logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Creates the CMS router with all routes and middleware.
///
/// Auth-protected route groups receive a clone of the state so the token
/// middleware can validate signatures before handlers run.
///
/// # Routes
/// - `/health`, `/api/v1` - Liveness and endpoint index
/// - `/api/v1/auth` - Registration, login, token verification
/// - `/api/v1/athletes`, `/api/v1/coaches`, `/api/v1/clubs`,
///   `/api/v1/managers` - Role dashboards (Bearer)
/// - `/docs` - Swagger UI over the generated OpenAPI document
pub fn create_cms_router(state: CmsState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(CmsApiDoc::openapi())
        .merge(handlers::health::cms_root_routes())
        .nest("/api/v1/auth", handlers::auth::auth_routes(state.clone()))
        .nest(
            "/api/v1/athletes",
            handlers::athletes::athlete_routes(state.clone()),
        )
        .nest(
            "/api/v1/coaches",
            handlers::coaches::coach_routes(state.clone()),
        )
        .nest("/api/v1/clubs", handlers::clubs::club_routes(state.clone()))
        .nest(
            "/api/v1/managers",
            handlers::managers::manager_routes(state.clone()),
        )
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        // Middleware is applied in reverse order - last added runs first
        // So logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Fallback for unknown paths. Keeps 404s in the same JSON envelope as
/// handler errors.
async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Resource not found")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_envelope() {
        let (status, Json(body)) = not_found().await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Resource not found");
    }

    // Note: Full integration tests would require a test database.
    // Router assembly itself is exercised by the server startup path.
}
