//! App version request handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::VERSIONS_TAG;
use crate::api::dto::{ErrorResponse, LatestVersionQuery, VersionInfo};
use crate::error::AppResult;
use crate::state::StoreState;
use crate::utils::validate::{check_required_fields, is_present};

/// Creates the version routes.
///
/// # Routes
/// - `GET /{slug}/latest?platform=` - Latest published version for a platform
pub fn version_routes() -> OpenApiRouter<StoreState> {
    OpenApiRouter::new().routes(routes!(latest_version))
}

/// GET /api/versions/{slug}/latest - Latest published version
///
/// Resolves the app by slug, then picks the highest published version
/// for the requested platform.
#[utoipa::path(
    get,
    path = "/{slug}/latest",
    tag = VERSIONS_TAG,
    params(
        ("slug" = String, Path, description = "App slug"),
        LatestVersionQuery
    ),
    responses(
        (status = 200, description = "Latest published version", body = VersionInfo),
        (status = 400, description = "Missing platform parameter", body = ErrorResponse),
        (status = 404, description = "App or version not found", body = ErrorResponse)
    )
)]
async fn latest_version(
    State(state): State<StoreState>,
    Path(slug): Path<String>,
    Query(query): Query<LatestVersionQuery>,
) -> AppResult<Json<VersionInfo>> {
    check_required_fields(&[("platform", is_present(&query.platform))])?;
    let platform = query.platform.unwrap_or_default();

    let version = state
        .services
        .catalog
        .latest_version(&slug, &platform)
        .await?;
    Ok(Json(VersionInfo::from(version)))
}
