//! Catalog service for the app-store business logic.

use crate::error::{AppError, AppResult};
use crate::models::store::{App, Version};
use crate::repositories::{AppRepository, VersionRepository};

/// Catalog service exposing app listing and version resolution.
///
/// Cloning is cheap since the repositories share one `Arc`-backed pool.
#[derive(Clone)]
pub struct CatalogService {
    apps: AppRepository,
    versions: VersionRepository,
}

impl CatalogService {
    /// Creates a new CatalogService with the given repositories.
    pub fn new(apps: AppRepository, versions: VersionRepository) -> Self {
        Self { apps, versions }
    }

    /// Lists every app in the catalog.
    pub async fn list_apps(&self) -> AppResult<Vec<App>> {
        self.apps.list_all().await
    }

    /// Gets an app by its slug.
    ///
    /// # Returns
    /// The app if found, or `NotFound` error
    pub async fn get_app(&self, slug: &str) -> AppResult<App> {
        self.apps
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "App".to_string(),
                field: "slug".to_string(),
                value: slug.to_string(),
            })
    }

    /// Resolves the latest published version of an app for one platform.
    ///
    /// # Returns
    /// The version if the app exists and has a matching published version,
    /// or `NotFound` error
    pub async fn latest_version(&self, slug: &str, platform: &str) -> AppResult<Version> {
        let app = self.get_app(slug).await?;

        self.versions
            .find_latest_published(app.id, platform)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "Version".to_string(),
                field: "platform".to_string(),
                value: platform.to_string(),
            })
    }
}
