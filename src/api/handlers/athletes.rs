//! Athlete dashboard and profile handlers.

use axum::{
    Json,
    extract::{Path, State},
    middleware,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::ATHLETES_TAG;
use crate::api::dto::{AthleteDashboardResponse, AthleteProfileResponse, ErrorResponse};
use crate::api::middleware::auth_middleware;
use crate::error::AppResult;
use crate::state::CmsState;

/// Creates the athlete routes.
///
/// # Routes
/// - `GET /dashboard/{user_id}` - Full athlete dashboard (Bearer)
/// - `GET /profile/{user_id}` - Athlete profile only (Bearer)
pub fn athlete_routes(state: CmsState) -> OpenApiRouter<CmsState> {
    OpenApiRouter::new()
        .routes(routes!(get_athlete_dashboard))
        .routes(routes!(get_athlete_profile))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// GET /api/v1/athletes/dashboard/{user_id} - Athlete dashboard
///
/// Profile, career aggregates, club, latest news, and the athlete's five
/// most recent games with their stat lines.
#[utoipa::path(
    get,
    path = "/dashboard/{user_id}",
    tag = ATHLETES_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID of the athlete")
    ),
    responses(
        (status = 200, description = "Dashboard payload", body = AthleteDashboardResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No athlete for this user", body = ErrorResponse)
    ),
    security(
        ("bearerAuth" = [])
    )
)]
async fn get_athlete_dashboard(
    State(state): State<CmsState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<AthleteDashboardResponse>> {
    let dashboard = state.services.dashboards.athlete_dashboard(user_id).await?;
    Ok(Json(dashboard.into()))
}

/// GET /api/v1/athletes/profile/{user_id} - Athlete profile
#[utoipa::path(
    get,
    path = "/profile/{user_id}",
    tag = ATHLETES_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID of the athlete")
    ),
    responses(
        (status = 200, description = "Profile payload", body = AthleteProfileResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No athlete for this user", body = ErrorResponse)
    ),
    security(
        ("bearerAuth" = [])
    )
)]
async fn get_athlete_profile(
    State(state): State<CmsState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<AthleteProfileResponse>> {
    let profile = state.services.dashboards.athlete_profile(user_id).await?;
    Ok(Json(profile.into()))
}
