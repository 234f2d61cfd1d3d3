//! Authentication handlers for the CMS API.
//!
//! Registration, login, and token verification are public; the current-user
//! and password-change endpoints sit behind the Bearer auth middleware.

use axum::{Extension, Json, extract::State, http::StatusCode, middleware};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AUTH_TAG;
use crate::api::dto::{
    ChangePasswordRequest, ErrorResponse, LoginRequest, LoginResponse, MeResponse,
    MessageResponse, RegisterRequest, RegisterResponse, VerifyTokenRequest, VerifyTokenResponse,
};
use crate::api::middleware::{AuthUser, auth_middleware};
use crate::error::{AppError, AppResult};
use crate::state::CmsState;
use crate::utils::validate::{ValidatedJson, check_required_fields, is_present};

/// Creates the authentication routes.
///
/// # Routes
/// - `POST /register` - Create a new user account
/// - `POST /login` - Authenticate and get a session token
/// - `POST /verify-token` - Check a token without using it
/// - `GET /me` - Current user (Bearer)
/// - `POST /change-password` - Change own password (Bearer)
pub fn auth_routes(state: CmsState) -> OpenApiRouter<CmsState> {
    let protected = OpenApiRouter::new()
        .routes(routes!(me))
        .routes(routes!(change_password))
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    OpenApiRouter::new()
        .routes(routes!(register))
        .routes(routes!(login))
        .routes(routes!(verify_token))
        .merge(protected)
}

/// POST /api/v1/auth/register - Register a new user
///
/// Missing fields are reported by name; the role defaults to `athlete`
/// when absent.
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = RegisterResponse),
        (status = 400, description = "Missing fields, bad role, or duplicate email", body = ErrorResponse)
    )
)]
async fn register(
    State(state): State<CmsState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let email = payload.email.as_deref().map(str::trim).unwrap_or("");
    let password = payload.password.as_deref().unwrap_or("");
    let first_name = payload.first_name.as_deref().map(str::trim).unwrap_or("");
    let last_name = payload.last_name.as_deref().map(str::trim).unwrap_or("");

    check_required_fields(&[
        ("email", !email.is_empty()),
        ("password", !password.is_empty()),
        ("first_name", !first_name.is_empty()),
        ("last_name", !last_name.is_empty()),
    ])?;

    // An absent role defaults to athlete; a present-but-bad one is rejected.
    let role = match payload.role.as_deref() {
        Some(role) => role.trim(),
        None => "athlete",
    };

    let user_id = state
        .services
        .auth
        .register(email, password, first_name, last_name, role)
        .await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse::created(user_id))))
}

/// POST /api/v1/auth/login - Authenticate a user
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing credentials", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
async fn login(
    State(state): State<CmsState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let email = payload.email.as_deref().map(str::trim).unwrap_or("");
    if email.is_empty() || !is_present(&payload.password) {
        return Err(AppError::BadRequest {
            message: "Email and password required".to_string(),
        });
    }
    let password = payload.password.as_deref().unwrap_or("");

    let (token, user) = state.services.auth.login(email, password).await?;
    Ok(Json(LoginResponse::new(token, user)))
}

/// GET /api/v1/auth/me - Current user information
#[utoipa::path(
    get,
    path = "/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = MeResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User row is gone", body = ErrorResponse)
    ),
    security(
        ("bearerAuth" = [])
    )
)]
async fn me(
    State(state): State<CmsState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<MeResponse>> {
    let user = state.services.auth.get_user(auth_user.user_id).await?;
    Ok(Json(MeResponse::from(user)))
}

/// POST /api/v1/auth/change-password - Change own password
#[utoipa::path(
    post,
    path = "/change-password",
    tag = AUTH_TAG,
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Missing fields or wrong current password", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(
        ("bearerAuth" = [])
    )
)]
async fn change_password(
    State(state): State<CmsState>,
    Extension(auth_user): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    if !is_present(&payload.old_password) || !is_present(&payload.new_password) {
        return Err(AppError::BadRequest {
            message: "Old password and new password required".to_string(),
        });
    }
    let old_password = payload.old_password.as_deref().unwrap_or("");
    let new_password = payload.new_password.as_deref().unwrap_or("");

    state
        .services
        .auth
        .change_password(auth_user.user_id, old_password, new_password)
        .await?;

    Ok(Json(MessageResponse::new("Password changed successfully")))
}

/// POST /api/v1/auth/verify-token - Verify a token
///
/// Reports validity in the body instead of failing the request, so clients
/// can probe a stored token without triggering auth-failure handling.
#[utoipa::path(
    post,
    path = "/verify-token",
    tag = AUTH_TAG,
    request_body = VerifyTokenRequest,
    responses(
        (status = 200, description = "Token is valid", body = VerifyTokenResponse),
        (status = 400, description = "No token provided", body = ErrorResponse),
        (status = 401, description = "Token is invalid or expired", body = VerifyTokenResponse)
    )
)]
async fn verify_token(
    State(state): State<CmsState>,
    ValidatedJson(payload): ValidatedJson<VerifyTokenRequest>,
) -> AppResult<(StatusCode, Json<VerifyTokenResponse>)> {
    let token = payload.token.as_deref().ok_or_else(|| AppError::BadRequest {
        message: "Token required".to_string(),
    })?;

    match state.services.auth.verify_token(token) {
        Ok(claims) => Ok((StatusCode::OK, Json(VerifyTokenResponse::valid(claims)))),
        Err(_) => Ok((
            StatusCode::UNAUTHORIZED,
            Json(VerifyTokenResponse::invalid()),
        )),
    }
}
