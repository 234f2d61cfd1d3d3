//! Repository layer for data access operations.
//!
//! Provides async database operations for both service databases.

mod app_repo;
mod athlete_repo;
mod club_repo;
mod coach_repo;
mod manager_repo;
mod news_repo;
mod user_repo;
mod version_repo;

pub use app_repo::AppRepository;
pub use athlete_repo::AthleteRepository;
pub use club_repo::ClubRepository;
pub use coach_repo::CoachRepository;
pub use manager_repo::ManagerRepository;
pub use news_repo::NewsRepository;
pub use user_repo::UserRepository;
pub use version_repo::VersionRepository;

use crate::db::AsyncDbPool;

/// Aggregates the repositories of the app-store database.
///
/// Cloning is cheap since every repository shares the same `Arc`-backed
/// pool.
#[derive(Clone)]
pub struct StoreRepositories {
    pub apps: AppRepository,
    pub versions: VersionRepository,
}

impl StoreRepositories {
    /// Creates all store repositories from one connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            apps: AppRepository::new(pool.clone()),
            versions: VersionRepository::new(pool),
        }
    }
}

/// Aggregates the repositories of the CMS database.
#[derive(Clone)]
pub struct CmsRepositories {
    pub users: UserRepository,
    pub athletes: AthleteRepository,
    pub coaches: CoachRepository,
    pub clubs: ClubRepository,
    pub managers: ManagerRepository,
    pub news: NewsRepository,
}

impl CmsRepositories {
    /// Creates all CMS repositories from one connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            athletes: AthleteRepository::new(pool.clone()),
            coaches: CoachRepository::new(pool.clone()),
            clubs: ClubRepository::new(pool.clone()),
            managers: ManagerRepository::new(pool.clone()),
            news: NewsRepository::new(pool),
        }
    }
}
