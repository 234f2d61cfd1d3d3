//! App store DTOs for catalog and version responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::store::{App, Version};

/// Response body for one app row.
#[derive(Debug, Serialize, ToSchema)]
pub struct AppResponse {
    pub id: i32,
    #[schema(example = "solar-tracker")]
    pub slug: String,
    #[schema(example = "Solar Tracker")]
    pub name: String,
    pub description: Option<String>,
    pub developer_id: i32,
}

impl From<App> for AppResponse {
    fn from(app: App) -> Self {
        Self {
            id: app.id,
            slug: app.slug,
            name: app.name,
            description: app.description,
            developer_id: app.developer_id,
        }
    }
}

/// Response body for the latest published version of an app.
#[derive(Debug, Serialize, ToSchema)]
pub struct VersionInfo {
    #[schema(example = "1.4.2")]
    pub semver: String,
    #[schema(example = "android")]
    pub platform: String,
    pub file_url: String,
    pub file_sha256: String,
    pub release_notes: Option<String>,
}

impl From<Version> for VersionInfo {
    fn from(version: Version) -> Self {
        Self {
            semver: version.semver,
            platform: version.platform,
            file_url: version.file_url,
            file_sha256: version.file_sha256,
            release_notes: version.release_notes,
        }
    }
}

/// Query parameters for the latest-version lookup.
#[derive(Debug, Deserialize, IntoParams)]
pub struct LatestVersionQuery {
    /// Target platform, e.g. `android` or `ios`
    pub platform: Option<String>,
}

/// Placeholder token response for the mobile-client auth stubs.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    #[schema(example = "dummy-token")]
    pub token: String,
}

impl TokenResponse {
    /// Fixed login token until the real credential flow lands.
    pub fn placeholder() -> Self {
        Self {
            token: "dummy-token".to_string(),
        }
    }

    /// Fixed refresh token until the real credential flow lands.
    pub fn placeholder_refresh() -> Self {
        Self {
            token: "dummy-refresh-token".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_response_from_model() {
        let app = App {
            id: 3,
            slug: "star-charts".to_string(),
            name: "Star Charts".to_string(),
            description: None,
            developer_id: 1,
        };

        let response = AppResponse::from(app);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["slug"], "star-charts");
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["developer_id"], 1);
    }

    #[test]
    fn test_version_info_drops_internal_columns() {
        let version = Version {
            id: 9,
            app_id: 3,
            semver: "2.0.1".to_string(),
            platform: "ios".to_string(),
            file_url: "https://cdn.example.com/star-charts-2.0.1.ipa".to_string(),
            file_sha256: "ab".repeat(32),
            release_notes: Some("Bug fixes".to_string()),
            published: true,
        };

        let json = serde_json::to_value(VersionInfo::from(version)).unwrap();
        assert_eq!(json["semver"], "2.0.1");
        assert!(json.get("id").is_none());
        assert!(json.get("published").is_none());
    }

    #[test]
    fn test_placeholder_tokens() {
        assert_eq!(TokenResponse::placeholder().token, "dummy-token");
        assert_eq!(
            TokenResponse::placeholder_refresh().token,
            "dummy-refresh-token"
        );
    }
}
