//! User repository for async database operations against the CMS database.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::cms::{NewUser, User};

/// User repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment). No need for `Arc<UserRepository>`.
#[derive(Clone)]
pub struct UserRepository {
    pool: AsyncDbPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Creates a new user in the database.
    ///
    /// # Arguments
    /// * `new_user` - The user data to insert
    ///
    /// # Returns
    /// The created user with generated id and timestamp
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        use crate::schema::cms::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(users)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds a user by their ID.
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        use crate::schema::cms::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .filter(user_id.eq(id))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Finds a user by their email address.
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn find_by_email(&self, user_email: &str) -> Result<Option<User>, AppError> {
        use crate::schema::cms::users::dsl::*;
        let mut conn = self.pool.get().await?;

        users
            .filter(email.eq(user_email))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Replaces the stored password hash of one user.
    ///
    /// # Returns
    /// The number of affected rows (0 or 1)
    pub async fn update_password(&self, id: i32, new_hash: &str) -> Result<usize, AppError> {
        use crate::schema::cms::users::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(users.filter(user_id.eq(id)))
            .set(password_hash.eq(new_hash))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
