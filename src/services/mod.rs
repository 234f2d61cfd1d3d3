//! Business-logic services built on top of the repositories.

pub mod auth_service;
pub mod catalog_service;
pub mod dashboard_service;

pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use dashboard_service::{
    AthleteDashboard, ClubDashboard, CoachDashboard, DashboardService, ManagerDashboard,
};

use crate::config::settings::JwtConfig;
use crate::repositories::{CmsRepositories, StoreRepositories};

/// Aggregates all services for the app store API.
#[derive(Clone)]
pub struct StoreServices {
    pub catalog: CatalogService,
}

impl StoreServices {
    /// Creates the service aggregate from the repository aggregate.
    pub fn new(repositories: StoreRepositories) -> Self {
        Self {
            catalog: CatalogService::new(repositories.apps, repositories.versions),
        }
    }
}

/// Aggregates all services for the CMS API.
#[derive(Clone)]
pub struct CmsServices {
    pub auth: AuthService,
    pub dashboards: DashboardService,
}

impl CmsServices {
    /// Creates the service aggregate from the repository aggregate.
    pub fn new(repositories: CmsRepositories, jwt_config: JwtConfig) -> Self {
        Self {
            auth: AuthService::new(repositories.users, jwt_config),
            dashboards: DashboardService::new(
                repositories.athletes,
                repositories.coaches,
                repositories.clubs,
                repositories.managers,
                repositories.news,
            ),
        }
    }
}
