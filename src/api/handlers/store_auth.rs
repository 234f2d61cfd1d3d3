//! Placeholder auth handlers for the app store API.
//!
//! The mobile clients expect a token pair before the real credential flow
//! exists; both endpoints answer with fixed strings and check nothing.

use axum::Json;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AUTH_TAG;
use crate::api::dto::TokenResponse;
use crate::state::StoreState;

/// Creates the store auth stub routes.
///
/// # Routes
/// - `POST /login` - Placeholder login token
/// - `POST /refresh` - Placeholder refresh token
pub fn store_auth_routes() -> OpenApiRouter<StoreState> {
    OpenApiRouter::new()
        .routes(routes!(login))
        .routes(routes!(refresh))
}

/// POST /api/auth/login - Placeholder login
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Placeholder token", body = TokenResponse)
    )
)]
async fn login() -> Json<TokenResponse> {
    Json(TokenResponse::placeholder())
}

/// POST /api/auth/refresh - Placeholder refresh
#[utoipa::path(
    post,
    path = "/refresh",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Placeholder refresh token", body = TokenResponse)
    )
)]
async fn refresh() -> Json<TokenResponse> {
    Json(TokenResponse::placeholder_refresh())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_returns_fixed_token() {
        let Json(response) = login().await;
        assert_eq!(response.token, "dummy-token");
    }

    #[tokio::test]
    async fn test_refresh_returns_fixed_token() {
        let Json(response) = refresh().await;
        assert_eq!(response.token, "dummy-refresh-token");
    }
}
