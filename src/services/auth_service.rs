//! Authentication service for the CMS: registration, login, password
//! change and token verification.

use crate::config::JwtConfig;
use crate::error::{AppError, AppResult};
use crate::models::cms::{NewUser, User, UserRole};
use crate::repositories::UserRepository;
use crate::utils::jwt::{self, Claims};
use crate::utils::password;

/// Authentication service holding the user repository and JWT settings.
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    jwt: JwtConfig,
}

impl AuthService {
    /// Creates a new AuthService with the given repository and JWT config.
    pub fn new(users: UserRepository, jwt: JwtConfig) -> Self {
        Self { users, jwt }
    }

    /// Creates a new user account.
    ///
    /// Rejects duplicate emails and roles outside the known set before
    /// touching the database.
    ///
    /// # Returns
    /// The id of the created user
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
        role: &str,
    ) -> AppResult<i32> {
        let role: UserRole = role.parse().map_err(|_| AppError::BadRequest {
            message: "Invalid role. Must be: athlete, coach, club, or manager".to_string(),
        })?;

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::BadRequest {
                message: "Email already registered".to_string(),
            });
        }

        let password_hash = password::hash_password(password)?;
        let user = self
            .users
            .create(NewUser {
                email: email.to_string(),
                password_hash,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                role,
            })
            .await?;

        Ok(user.user_id)
    }

    /// Authenticates a user and issues a signed token.
    ///
    /// Unknown emails and wrong passwords are indistinguishable to the
    /// caller.
    ///
    /// # Returns
    /// The token together with the authenticated user
    pub async fn login(&self, email: &str, password: &str) -> AppResult<(String, User)> {
        let user = self.users.find_by_email(email).await?.ok_or_else(|| {
            AppError::Unauthorized {
                message: "Invalid email or password".to_string(),
            }
        })?;

        if !password::verify_password(password, &user.password_hash)? {
            return Err(AppError::Unauthorized {
                message: "Invalid email or password".to_string(),
            });
        }

        let token = jwt::generate_token(
            user.user_id,
            user.email.clone(),
            user.role.to_string(),
            &self.jwt.secret,
            self.jwt.expiration,
        )?;

        Ok((token, user))
    }

    /// Gets a user by their ID.
    ///
    /// # Returns
    /// The user if found, or `NotFound` error
    pub async fn get_user(&self, user_id: i32) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "User".to_string(),
                field: "id".to_string(),
                value: user_id.to_string(),
            })
    }

    /// Changes a user's password after verifying the current one.
    ///
    /// A wrong current password leaves the stored hash unchanged.
    pub async fn change_password(
        &self,
        user_id: i32,
        old_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let user = self.get_user(user_id).await?;

        if !password::verify_password(old_password, &user.password_hash)? {
            return Err(AppError::BadRequest {
                message: "Current password is incorrect".to_string(),
            });
        }

        let new_hash = password::hash_password(new_password)?;
        let affected = self.users.update_password(user_id, &new_hash).await?;
        if affected == 0 {
            return Err(AppError::Internal {
                source: anyhow::anyhow!("Password update affected no rows for user {}", user_id),
            });
        }

        Ok(())
    }

    /// Validates a token and returns its claims.
    pub fn verify_token(&self, token: &str) -> AppResult<Claims> {
        jwt::validate_token(token, &self.jwt.secret)
    }
}
