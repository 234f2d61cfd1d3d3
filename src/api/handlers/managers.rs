//! Manager dashboard and profile handlers.

use axum::{
    Json,
    extract::{Path, State},
    middleware,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::MANAGERS_TAG;
use crate::api::dto::{ErrorResponse, ManagerDashboardResponse, ManagerProfileResponse};
use crate::api::middleware::auth_middleware;
use crate::error::AppResult;
use crate::state::CmsState;

/// Creates the manager routes.
///
/// # Routes
/// - `GET /dashboard/{user_id}` - Full manager dashboard (Bearer)
/// - `GET /profile/{user_id}` - Manager profile only (Bearer)
pub fn manager_routes(state: CmsState) -> OpenApiRouter<CmsState> {
    OpenApiRouter::new()
        .routes(routes!(get_manager_dashboard))
        .routes(routes!(get_manager_profile))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// GET /api/v1/managers/dashboard/{user_id} - Manager dashboard
///
/// Profile, managed club, that club's coaches and players, and latest news.
#[utoipa::path(
    get,
    path = "/dashboard/{user_id}",
    tag = MANAGERS_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID of the manager")
    ),
    responses(
        (status = 200, description = "Dashboard payload", body = ManagerDashboardResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No manager for this user", body = ErrorResponse)
    ),
    security(
        ("bearerAuth" = [])
    )
)]
async fn get_manager_dashboard(
    State(state): State<CmsState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<ManagerDashboardResponse>> {
    let dashboard = state.services.dashboards.manager_dashboard(user_id).await?;
    Ok(Json(dashboard.into()))
}

/// GET /api/v1/managers/profile/{user_id} - Manager profile
#[utoipa::path(
    get,
    path = "/profile/{user_id}",
    tag = MANAGERS_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID of the manager")
    ),
    responses(
        (status = 200, description = "Profile payload", body = ManagerProfileResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No manager for this user", body = ErrorResponse)
    ),
    security(
        ("bearerAuth" = [])
    )
)]
async fn get_manager_profile(
    State(state): State<CmsState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<ManagerProfileResponse>> {
    let profile = state.services.dashboards.manager_profile(user_id).await?;
    Ok(Json(profile.into()))
}
