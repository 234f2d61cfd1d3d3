//! Coach dashboard and profile handlers.

use axum::{
    Json,
    extract::{Path, State},
    middleware,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::COACHES_TAG;
use crate::api::dto::{CoachDashboardResponse, CoachProfileResponse, ErrorResponse};
use crate::api::middleware::auth_middleware;
use crate::error::AppResult;
use crate::state::CmsState;

/// Creates the coach routes.
///
/// # Routes
/// - `GET /dashboard/{user_id}` - Full coach dashboard (Bearer)
/// - `GET /profile/{user_id}` - Coach profile only (Bearer)
pub fn coach_routes(state: CmsState) -> OpenApiRouter<CmsState> {
    OpenApiRouter::new()
        .routes(routes!(get_coach_dashboard))
        .routes(routes!(get_coach_profile))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// GET /api/v1/coaches/dashboard/{user_id} - Coach dashboard
///
/// Profile, club, coached athletes with their per-game scoring averages,
/// and latest news.
#[utoipa::path(
    get,
    path = "/dashboard/{user_id}",
    tag = COACHES_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID of the coach")
    ),
    responses(
        (status = 200, description = "Dashboard payload", body = CoachDashboardResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No coach for this user", body = ErrorResponse)
    ),
    security(
        ("bearerAuth" = [])
    )
)]
async fn get_coach_dashboard(
    State(state): State<CmsState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<CoachDashboardResponse>> {
    let dashboard = state.services.dashboards.coach_dashboard(user_id).await?;
    Ok(Json(dashboard.into()))
}

/// GET /api/v1/coaches/profile/{user_id} - Coach profile
#[utoipa::path(
    get,
    path = "/profile/{user_id}",
    tag = COACHES_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID of the coach")
    ),
    responses(
        (status = 200, description = "Profile payload", body = CoachProfileResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No coach for this user", body = ErrorResponse)
    ),
    security(
        ("bearerAuth" = [])
    )
)]
async fn get_coach_profile(
    State(state): State<CmsState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<CoachProfileResponse>> {
    let profile = state.services.dashboards.coach_profile(user_id).await?;
    Ok(Json(profile.into()))
}
