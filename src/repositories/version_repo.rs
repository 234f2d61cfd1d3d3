//! Version repository for async database operations.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::store::Version;

/// Version repository holding an async connection pool.
#[derive(Clone)]
pub struct VersionRepository {
    pool: AsyncDbPool,
}

impl VersionRepository {
    /// Creates a new VersionRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Finds the latest published version of an app for one platform.
    ///
    /// Latest means the highest id among published rows matching
    /// `(app_id, platform)`.
    pub async fn find_latest_published(
        &self,
        target_app_id: i32,
        target_platform: &str,
    ) -> Result<Option<Version>, AppError> {
        use crate::schema::store::versions::dsl::*;
        let mut conn = self.pool.get().await?;

        versions
            .filter(app_id.eq(target_app_id))
            .filter(platform.eq(target_platform))
            .filter(published.eq(true))
            .order(id.desc())
            .select(Version::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
