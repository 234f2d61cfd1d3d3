use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const HEALTH_TAG: &str = "Health";
pub const APPS_TAG: &str = "Apps";
pub const VERSIONS_TAG: &str = "Versions";
pub const AUTH_TAG: &str = "Auth";
pub const ATHLETES_TAG: &str = "Athletes";
pub const COACHES_TAG: &str = "Coaches";
pub const CLUBS_TAG: &str = "Clubs";
pub const MANAGERS_TAG: &str = "Managers";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hybrid App Store API",
        description = "Catalog of apps and their published versions",
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = APPS_TAG, description = "App catalog endpoints"),
        (name = VERSIONS_TAG, description = "App version endpoints"),
        (name = AUTH_TAG, description = "Authentication endpoints"),
    )
)]
pub struct StoreApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dunes CMS API",
        description = "An api server for the Dunes Be One basketball CMS",
    ),
    modifiers(&SecurityAddon),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = AUTH_TAG, description = "Authentication endpoints"),
        (name = ATHLETES_TAG, description = "Athlete dashboard endpoints"),
        (name = COACHES_TAG, description = "Coach dashboard endpoints"),
        (name = CLUBS_TAG, description = "Club dashboard endpoints"),
        (name = MANAGERS_TAG, description = "Manager dashboard endpoints"),
    )
)]
pub struct CmsApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer Token Authentication"))
                        .build(),
                ),
            )
        }
    }
}
