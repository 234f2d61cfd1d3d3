//! Club dashboard and info handlers.
//!
//! Club endpoints key on the club's own ID rather than a user ID.

use axum::{
    Json,
    extract::{Path, State},
    middleware,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::CLUBS_TAG;
use crate::api::dto::{ClubDashboardResponse, ClubInfoResponse, ErrorResponse};
use crate::api::middleware::auth_middleware;
use crate::error::AppResult;
use crate::state::CmsState;

/// Creates the club routes.
///
/// # Routes
/// - `GET /dashboard/{club_id}` - Full club dashboard (Bearer)
/// - `GET /info/{club_id}` - Club record only (Bearer)
pub fn club_routes(state: CmsState) -> OpenApiRouter<CmsState> {
    OpenApiRouter::new()
        .routes(routes!(get_club_dashboard))
        .routes(routes!(get_club_info))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// GET /api/v1/clubs/dashboard/{club_id} - Club dashboard
///
/// Club record, coaching staff, full roster with scoring averages, and
/// latest news.
#[utoipa::path(
    get,
    path = "/dashboard/{club_id}",
    tag = CLUBS_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Dashboard payload", body = ClubDashboardResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such club", body = ErrorResponse)
    ),
    security(
        ("bearerAuth" = [])
    )
)]
async fn get_club_dashboard(
    State(state): State<CmsState>,
    Path(club_id): Path<i32>,
) -> AppResult<Json<ClubDashboardResponse>> {
    let dashboard = state.services.dashboards.club_dashboard(club_id).await?;
    Ok(Json(dashboard.into()))
}

/// GET /api/v1/clubs/info/{club_id} - Club info
#[utoipa::path(
    get,
    path = "/info/{club_id}",
    tag = CLUBS_TAG,
    params(
        ("club_id" = i32, Path, description = "Club ID")
    ),
    responses(
        (status = 200, description = "Club payload", body = ClubInfoResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such club", body = ErrorResponse)
    ),
    security(
        ("bearerAuth" = [])
    )
)]
async fn get_club_info(
    State(state): State<CmsState>,
    Path(club_id): Path<i32>,
) -> AppResult<Json<ClubInfoResponse>> {
    let club = state.services.dashboards.club_info(club_id).await?;
    Ok(Json(club.into()))
}
