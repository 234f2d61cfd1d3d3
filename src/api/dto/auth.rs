//! Authentication DTOs for the CMS API.
//!
//! Request fields are optional strings so handlers can report exactly
//! which required fields are missing instead of failing deserialization.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::cms::User;
use crate::utils::jwt::Claims;

/// Registration request payload.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RegisterRequest {
    /// User's email address (unique)
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "athlete1@dunes.com", format = "email")]
    pub email: Option<String>,
    /// Password (plain text, will be hashed)
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "StrongPass123!", format = "password")]
    pub password: Option<String>,
    #[schema(example = "Jordan")]
    pub first_name: Option<String>,
    #[schema(example = "Reyes")]
    pub last_name: Option<String>,
    /// One of `athlete`, `coach`, `club`, `manager`; defaults to `athlete`
    #[schema(example = "athlete")]
    pub role: Option<String>,
}

/// Login request payload.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[schema(example = "athlete1@dunes.com", format = "email")]
    pub email: Option<String>,
    #[schema(example = "StrongPass123!", format = "password")]
    pub password: Option<String>,
}

/// Password change request payload.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ChangePasswordRequest {
    #[schema(format = "password")]
    pub old_password: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(format = "password")]
    pub new_password: Option<String>,
}

/// Token verification request payload.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct VerifyTokenRequest {
    #[schema(example = "eyJ0eXAiOiJKV1QiLCJhbGc...")]
    pub token: Option<String>,
}

/// Registration success response.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    #[schema(example = "User created successfully")]
    pub message: String,
    pub user_id: i32,
}

impl RegisterResponse {
    pub fn created(user_id: i32) -> Self {
        Self {
            success: true,
            message: "User created successfully".to_string(),
            user_id,
        }
    }
}

/// User information embedded in the login response.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserInfo {
    pub user_id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[schema(example = "athlete")]
    pub role: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role.to_string(),
        }
    }
}

/// Login success response with the session token.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    #[schema(example = "eyJ0eXAiOiJKV1QiLCJhbGc...")]
    pub token: String,
    pub user: UserInfo,
}

impl LoginResponse {
    pub fn new(token: String, user: User) -> Self {
        Self {
            success: true,
            token,
            user: user.into(),
        }
    }
}

/// User information returned by the `me` endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDetail {
    pub user_id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[schema(example = "coach")]
    pub role: String,
    #[schema(example = "2025-03-14T09:26:53")]
    pub created_at: String,
}

impl From<User> for UserDetail {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role.to_string(),
            created_at: user.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

/// Current-user response envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    pub success: bool,
    pub user: UserDetail,
}

impl From<User> for MeResponse {
    fn from(user: User) -> Self {
        Self {
            success: true,
            user: user.into(),
        }
    }
}

/// Generic success-with-message response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    #[schema(example = "Password changed successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// Token verification outcome.
///
/// A valid token echoes its identity claims; an invalid one carries only
/// `valid: false` and the error message.
#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "manager")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerifyTokenResponse {
    pub fn valid(claims: Claims) -> Self {
        Self {
            valid: true,
            user_id: Some(claims.user_id),
            email: Some(claims.email),
            role: Some(claims.role),
            error: None,
        }
    }

    pub fn invalid() -> Self {
        Self {
            valid: false,
            user_id: None,
            email: None,
            role: None,
            error: Some("Invalid or expired token".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cms::UserRole;
    use chrono::NaiveDate;

    fn sample_user() -> User {
        User {
            user_id: 12,
            email: "coach3@dunes.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            first_name: "Dana".to_string(),
            last_name: "Okafor".to_string(),
            role: UserRole::Coach,
            photo_url: None,
            created_at: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(9, 26, 53)
                .unwrap(),
        }
    }

    #[test]
    fn test_user_info_excludes_password_hash() {
        let json = serde_json::to_value(UserInfo::from(sample_user())).unwrap();
        assert_eq!(json["user_id"], 12);
        assert_eq!(json["role"], "coach");
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_me_response_formats_created_at() {
        let json = serde_json::to_value(MeResponse::from(sample_user())).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["user"]["created_at"], "2025-03-14T09:26:53");
    }

    #[test]
    fn test_verify_token_valid_echoes_claims() {
        let claims = Claims::new(7, "manager1@dunes.com".to_string(), "manager".to_string(), 60);
        let json = serde_json::to_value(VerifyTokenResponse::valid(claims)).unwrap();
        assert_eq!(json["valid"], true);
        assert_eq!(json["user_id"], 7);
        assert_eq!(json["role"], "manager");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_verify_token_invalid_carries_only_error() {
        let json = serde_json::to_value(VerifyTokenResponse::invalid()).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["error"], "Invalid or expired token");
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_register_request_validates_email_format() {
        let request = RegisterRequest {
            email: Some("not-an-email".to_string()),
            password: Some("StrongPass123!".to_string()),
            first_name: Some("Jordan".to_string()),
            last_name: Some("Reyes".to_string()),
            role: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_skips_absent_fields() {
        let request = RegisterRequest {
            email: None,
            password: None,
            first_name: None,
            last_name: None,
            role: None,
        };
        // Presence is the handler's concern; absent fields pass format checks.
        assert!(request.validate().is_ok());
    }
}
