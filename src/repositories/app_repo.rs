//! App repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::store::App;

/// App repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment).
#[derive(Clone)]
pub struct AppRepository {
    pool: AsyncDbPool,
}

impl AppRepository {
    /// Creates a new AppRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Lists every app in the catalog.
    pub async fn list_all(&self) -> Result<Vec<App>, AppError> {
        use crate::schema::store::apps::dsl::*;
        let mut conn = self.pool.get().await?;

        apps.order(id.asc())
            .select(App::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Finds an app by its slug.
    ///
    /// # Returns
    /// `Some(App)` if found, `None` otherwise
    pub async fn find_by_slug(&self, app_slug: &str) -> Result<Option<App>, AppError> {
        use crate::schema::store::apps::dsl::*;
        let mut conn = self.pool.get().await?;

        apps.filter(slug.eq(app_slug))
            .select(App::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
