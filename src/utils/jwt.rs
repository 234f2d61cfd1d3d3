use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// JWT claims carried by CMS access tokens
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// ID of the authenticated user
    pub user_id: i32,
    /// User email
    pub email: String,
    /// User role (athlete, coach, club or manager)
    pub role: String,
    /// Issued at (timestamp)
    pub iat: i64,
    /// Expiration time (timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user
    ///
    /// # Arguments
    /// * `user_id` - The user's ID
    /// * `email` - The user's email
    /// * `role` - The user's role
    /// * `expiration_seconds` - Token validity duration in seconds
    pub fn new(user_id: i32, email: String, role: String, expiration_seconds: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::seconds(expiration_seconds);

        Self {
            user_id,
            email,
            role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }
}

/// Generates a JWT token for a user
///
/// # Arguments
/// * `user_id` - The user's ID
/// * `email` - The user's email
/// * `role` - The user's role
/// * `secret` - The secret key for signing the token
/// * `expiration_seconds` - Token validity duration in seconds
///
/// # Returns
/// The encoded JWT token string
pub fn generate_token(
    user_id: i32,
    email: String,
    role: String,
    secret: &str,
    expiration_seconds: i64,
) -> AppResult<String> {
    let claims = Claims::new(user_id, email, role, expiration_seconds);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to generate JWT token: {}", e),
    })
}

/// Validates and decodes a JWT token
///
/// # Arguments
/// * `token` - The JWT token string to validate
/// * `secret` - The secret key for verifying the token
///
/// # Returns
/// The decoded claims if the token is valid
pub fn validate_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::Unauthorized {
            message: "Token has expired".to_string(),
        },
        jsonwebtoken::errors::ErrorKind::InvalidToken => AppError::Unauthorized {
            message: "Invalid token".to_string(),
        },
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AppError::Unauthorized {
            message: "Invalid token signature".to_string(),
        },
        _ => AppError::Unauthorized {
            message: format!("Token validation failed: {}", e),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test_secret_key_for_jwt_testing";

    #[test]
    fn test_generate_token() {
        let token = generate_token(
            1,
            "coach@dunes.com".to_string(),
            "coach".to_string(),
            TEST_SECRET,
            3600,
        );

        assert!(token.is_ok());
        let token_str = token.unwrap();
        assert!(!token_str.is_empty());
        assert!(token_str.contains('.'));
    }

    #[test]
    fn test_validate_token_success() {
        let token = generate_token(
            42,
            "athlete@dunes.com".to_string(),
            "athlete".to_string(),
            TEST_SECRET,
            3600,
        )
        .unwrap();

        let claims = validate_token(&token, TEST_SECRET);
        assert!(claims.is_ok());

        let claims = claims.unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.email, "athlete@dunes.com");
        assert_eq!(claims.role, "athlete");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_validate_token_invalid_secret() {
        let token = generate_token(
            1,
            "coach@dunes.com".to_string(),
            "coach".to_string(),
            TEST_SECRET,
            3600,
        )
        .unwrap();

        let result = validate_token(&token, "wrong_secret");
        assert!(result.is_err());

        if let Err(AppError::Unauthorized { message }) = result {
            assert!(message.contains("signature"));
        } else {
            panic!("Expected Unauthorized error");
        }
    }

    #[test]
    fn test_validate_token_invalid_format() {
        let result = validate_token("invalid.token.format", TEST_SECRET);
        assert!(result.is_err());

        if let Err(AppError::Unauthorized { message }) = result {
            assert!(message.contains("Invalid token") || message.contains("validation"));
        } else {
            panic!("Expected Unauthorized error");
        }
    }

    #[test]
    fn test_expired_token() {
        let token = generate_token(
            1,
            "coach@dunes.com".to_string(),
            "coach".to_string(),
            TEST_SECRET,
            -3600, // Negative duration to create an already expired token
        )
        .unwrap();

        let result = validate_token(&token, TEST_SECRET);
        assert!(result.is_err());

        if let Err(AppError::Unauthorized { message }) = result {
            assert!(message.contains("expired"));
        } else {
            panic!("Expected Unauthorized error for expired token");
        }
    }

    #[test]
    fn test_claims_expiry_window() {
        let claims = Claims::new(
            7,
            "manager@dunes.com".to_string(),
            "manager".to_string(),
            604_800,
        );

        assert_eq!(claims.exp - claims.iat, 604_800);
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new(9, "club@dunes.com".to_string(), "club".to_string(), 3600);

        let json = serde_json::to_string(&claims).unwrap();
        assert!(json.contains("\"user_id\":9"));
        assert!(json.contains("\"role\":\"club\""));
        assert!(json.contains("\"iat\""));
        assert!(json.contains("\"exp\""));
    }
}
