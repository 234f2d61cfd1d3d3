//! News repository for the published-news feed embedded in dashboards.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::dashboard::NewsItem;

/// News repository holding an async connection pool.
#[derive(Clone)]
pub struct NewsRepository {
    pool: AsyncDbPool,
}

impl NewsRepository {
    /// Creates a new NewsRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// The five most recent published news items, newest first.
    pub async fn latest_published(&self) -> Result<Vec<NewsItem>, AppError> {
        use crate::schema::cms::news::dsl::*;
        let mut conn = self.pool.get().await?;

        news.filter(is_published.eq(true))
            .order(created_at.desc())
            .limit(5)
            .select((news_id, title, content, category, created_at, is_published))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
