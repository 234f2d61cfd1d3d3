//! App catalog request handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::APPS_TAG;
use crate::api::dto::{AppResponse, ErrorResponse};
use crate::error::AppResult;
use crate::state::StoreState;

/// Creates the app catalog routes.
///
/// # Routes
/// - `GET /` - List all apps
/// - `GET /{slug}` - Get one app by slug
pub fn app_routes() -> OpenApiRouter<StoreState> {
    OpenApiRouter::new()
        .routes(routes!(list_apps))
        .routes(routes!(get_app))
}

/// GET /api/apps - List all apps
#[utoipa::path(
    get,
    path = "/",
    tag = APPS_TAG,
    responses(
        (status = 200, description = "All apps", body = Vec<AppResponse>)
    )
)]
async fn list_apps(State(state): State<StoreState>) -> AppResult<Json<Vec<AppResponse>>> {
    let apps = state.services.catalog.list_apps().await?;
    let responses: Vec<AppResponse> = apps.into_iter().map(AppResponse::from).collect();
    Ok(Json(responses))
}

/// GET /api/apps/{slug} - Get one app by slug
#[utoipa::path(
    get,
    path = "/{slug}",
    tag = APPS_TAG,
    params(
        ("slug" = String, Path, description = "App slug")
    ),
    responses(
        (status = 200, description = "App found", body = AppResponse),
        (status = 404, description = "App not found", body = ErrorResponse)
    )
)]
async fn get_app(
    State(state): State<StoreState>,
    Path(slug): Path<String>,
) -> AppResult<Json<AppResponse>> {
    let app = state.services.catalog.get_app(&slug).await?;
    Ok(Json(AppResponse::from(app)))
}
