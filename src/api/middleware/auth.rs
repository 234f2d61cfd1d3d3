//! JWT authentication middleware for the CMS API.
//!
//! Validates the Bearer token on protected routes and exposes the
//! authenticated user's claims to handlers.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::CmsState;
use crate::utils::jwt::{Claims, validate_token};

/// Extension type for authenticated user information.
///
/// Added to request extensions after successful authentication and
/// extracted in handlers using `Extension<AuthUser>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// User ID from JWT claims
    pub user_id: i32,
    /// User email from JWT claims
    pub email: String,
    /// User role from JWT claims
    pub role: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// JWT authentication middleware.
///
/// Expects `Authorization: Bearer <token>`. A missing or malformed header
/// and a failed validation both answer 401; validation failures collapse
/// into one generic message so callers cannot probe token state.
pub async fn auth_middleware(
    State(state): State<CmsState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(missing_header)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(missing_header)?;

    let claims =
        validate_token(token, &state.jwt_config.secret).map_err(|_| AppError::Unauthorized {
            message: "Invalid or expired token".to_string(),
        })?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

fn missing_header() -> AppError {
    AppError::Unauthorized {
        message: "Missing or invalid authorization header".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_user_from_claims() {
        let claims = Claims::new(
            123,
            "athlete7@dunes.com".to_string(),
            "athlete".to_string(),
            3600,
        );

        let auth_user = AuthUser::from(claims);
        assert_eq!(auth_user.user_id, 123);
        assert_eq!(auth_user.email, "athlete7@dunes.com");
        assert_eq!(auth_user.role, "athlete");
    }

    #[test]
    fn test_missing_header_error_message() {
        match missing_header() {
            AppError::Unauthorized { message } => {
                assert_eq!(message, "Missing or invalid authorization header");
            }
            other => panic!("Expected Unauthorized error, got {:?}", other),
        }
    }
}
