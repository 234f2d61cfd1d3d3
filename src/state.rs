//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use crate::config::JwtConfig;
use crate::db::AsyncDbPool;
use crate::repositories::{CmsRepositories, StoreRepositories};
use crate::services::{CmsServices, StoreServices};

/// Application state for the app store API.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since both the services and AsyncDbPool use Arc internally.
#[derive(Clone)]
pub struct StoreState {
    /// All business logic services
    pub services: StoreServices,
    /// Direct access to the database connection pool
    pub db_pool: AsyncDbPool,
}

impl StoreState {
    /// Creates a new StoreState from a database connection pool.
    ///
    /// Initializes all repositories and services from the provided pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        let repos = StoreRepositories::new(pool.clone());
        let services = StoreServices::new(repos);
        Self {
            services,
            db_pool: pool,
        }
    }
}

/// Application state for the CMS API.
///
/// Carries the JWT configuration alongside the services so the
/// authentication middleware can validate bearer tokens.
#[derive(Clone)]
pub struct CmsState {
    /// All business logic services
    pub services: CmsServices,
    /// Direct access to the database connection pool
    pub db_pool: AsyncDbPool,
    /// JWT configuration for token generation and validation
    pub jwt_config: JwtConfig,
}

impl CmsState {
    /// Creates a new CmsState from a database connection pool and JWT config.
    ///
    /// Initializes all repositories and services from the provided pool.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    /// * `jwt_config` - JWT configuration for authentication
    pub fn new(pool: AsyncDbPool, jwt_config: JwtConfig) -> Self {
        let repos = CmsRepositories::new(pool.clone());
        let services = CmsServices::new(repos, jwt_config.clone());
        Self {
            services,
            db_pool: pool,
            jwt_config,
        }
    }
}
