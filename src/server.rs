//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful shutdown
//! for both service binaries.

use diesel_migrations::EmbeddedMigrations;
use tokio::net::TcpListener;
use tokio::signal;

use crate::api::routes::{create_cms_router, create_store_router};
use crate::config::{Environment, settings::Settings};
use crate::db::{CMS_MIGRATIONS, STORE_MIGRATIONS, establish_async_connection_pool};
use crate::state::{CmsState, StoreState};

/// Identifies which service a binary runs.
///
/// The two services share the library crate but differ in router, database,
/// and configuration directory. Each binary hard-codes its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// The app-store catalog API
    Store,
    /// The basketball CMS API
    Cms,
}

impl ServiceKind {
    /// Default configuration directory for this service.
    pub fn default_config_dir(self) -> &'static str {
        match self {
            ServiceKind::Store => "config/appstore",
            ServiceKind::Cms => "config/cms",
        }
    }

    /// Embedded migrations for this service's database.
    pub fn migrations(self) -> EmbeddedMigrations {
        match self {
            ServiceKind::Store => STORE_MIGRATIONS,
            ServiceKind::Cms => CMS_MIGRATIONS,
        }
    }

    /// Service name used in startup logs.
    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::Store => "appstore",
            ServiceKind::Cms => "cms",
        }
    }
}

/// HTTP server manager
pub struct Server {
    settings: Settings,
    kind: ServiceKind,
}

impl Server {
    /// Create a new server with the given settings
    pub fn new(settings: Settings, kind: ServiceKind) -> Self {
        Self { settings, kind }
    }

    /// Start the server and run until shutdown signal
    ///
    /// This method:
    /// 1. Logs startup information
    /// 2. Validates service-specific configuration (JWT for the CMS)
    /// 3. Initializes database connection pool
    /// 4. Creates application state and router
    /// 5. Binds to configured address
    /// 6. Starts the HTTP server with graceful shutdown
    ///
    /// # Returns
    /// Returns Ok(()) on successful shutdown, or error on startup failure
    ///
    /// # Errors
    /// - JWT configuration validation errors (CMS only)
    /// - Database connection pool initialization errors
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run(self) -> anyhow::Result<()> {
        // Log application startup information
        tracing::info!(
            app_name = %self.settings.application.name,
            app_version = %self.settings.application.version,
            service = %self.kind.name(),
            environment = %Environment::from_env().as_str(),
            "Application starting"
        );

        // Log server configuration
        tracing::info!(
            host = %self.settings.server.host,
            port = %self.settings.server.port,
            request_timeout = %self.settings.server.request_timeout,
            keep_alive_timeout = %self.settings.server.keep_alive_timeout,
            "Server configuration loaded"
        );

        // Log database configuration (without sensitive URL details)
        tracing::info!(
            max_connections = %self.settings.database.max_connections,
            min_connections = %self.settings.database.min_connections,
            connection_timeout = %self.settings.database.connection_timeout,
            "Database configuration loaded"
        );

        // Log logger configuration
        tracing::info!(
            level = %self.settings.logger.level,
            console_enabled = %self.settings.logger.console.enabled,
            file_enabled = %self.settings.logger.file.enabled,
            "Logger configuration loaded"
        );

        // The store service never signs tokens, so only the CMS validates
        // the JWT section.
        if self.kind == ServiceKind::Cms {
            tracing::info!(
                expiration = %self.settings.jwt.expiration,
                secret_configured = %(!self.settings.jwt.secret.is_empty()),
                "JWT configuration loaded"
            );

            self.settings.jwt.validate().map_err(|e| {
                tracing::error!(error = %e, "JWT configuration validation failed");
                anyhow::anyhow!("JWT configuration validation failed: {}", e)
            })?;
            tracing::info!("JWT configuration validated");
        }

        tracing::info!("Configuration loaded successfully");

        // Initialize database connection pool
        tracing::info!("Initializing database connection pool...");
        let pool = establish_async_connection_pool(&self.settings.database).await?;
        tracing::info!("Database connection pool initialized");

        // Create application state and router for this service
        let router = match self.kind {
            ServiceKind::Store => create_store_router(StoreState::new(pool)),
            ServiceKind::Cms => {
                create_cms_router(CmsState::new(pool, self.settings.jwt.clone()))
            }
        };
        tracing::info!("Router configured");

        // Bind to the configured address
        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        // Start the server with graceful shutdown
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
///
/// This function returns when either signal is received, allowing
/// the server to perform graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_kind_config_dirs() {
        assert_eq!(ServiceKind::Store.default_config_dir(), "config/appstore");
        assert_eq!(ServiceKind::Cms.default_config_dir(), "config/cms");
    }

    #[test]
    fn test_service_kind_names() {
        assert_eq!(ServiceKind::Store.name(), "appstore");
        assert_eq!(ServiceKind::Cms.name(), "cms");
    }
}
