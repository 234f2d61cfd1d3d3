//! Serve command handler
//!
//! Handles the serve command's dry-run validation. Actual server startup is
//! driven by the binary's main after command execution.

use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::server::ServiceKind;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
    kind: ServiceKind,
}

impl ServeCommandHandler {
    /// Create a new serve command handler
    pub fn new(config: Settings, kind: ServiceKind) -> Self {
        Self { config, kind }
    }

    /// Execute the serve command with optional dry-run support
    ///
    /// # Arguments
    /// * `dry_run` - If true, validates configuration and exits without
    ///   starting the server
    ///
    /// # Errors
    /// - Configuration validation errors
    pub async fn execute(&self, dry_run: bool) -> AppResult<()> {
        if dry_run {
            self.validate_only()
        } else {
            // Server startup is handled by the binary after execute_command
            Ok(())
        }
    }

    /// Validate configuration without starting the server
    fn validate_only(&self) -> AppResult<()> {
        self.config.validate().map_err(AppError::from)?;

        println!("✓ Configuration is valid");
        println!("✓ Server would bind to: {}", self.config.server.address());
        println!("✓ Database URL is configured");
        println!("✓ Logger configuration is valid");

        if self.kind == ServiceKind::Cms {
            self.config.jwt.validate().map_err(AppError::from)?;
            println!("✓ JWT configuration is valid");
        }

        println!("Dry run completed successfully - configuration is ready for deployment");
        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &Settings {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApplicationConfig, DatabaseConfig, JwtConfig, ServerConfig};
    use crate::logger::LoggerConfig;

    fn create_valid_config() -> Settings {
        Settings {
            application: ApplicationConfig::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: "postgres://localhost/test".to_string(),
                max_connections: 10,
                min_connections: 1,
                connection_timeout: 30,
            },
            logger: LoggerConfig::default(),
            jwt: JwtConfig {
                secret: "0123456789abcdef0123456789abcdef".to_string(),
                expiration: 604_800,
            },
        }
    }

    #[tokio::test]
    async fn test_serve_handler_dry_run() {
        let handler = ServeCommandHandler::new(create_valid_config(), ServiceKind::Cms);

        let result = handler.execute(true).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_serve_handler_dry_run_invalid_port() {
        let mut config = create_valid_config();
        config.server.port = 0;
        let handler = ServeCommandHandler::new(config, ServiceKind::Store);

        let result = handler.execute(true).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_serve_handler_cms_requires_jwt_secret() {
        let mut config = create_valid_config();
        config.jwt.secret.clear();

        let store = ServeCommandHandler::new(config.clone(), ServiceKind::Store);
        assert!(store.execute(true).await.is_ok());

        let cms = ServeCommandHandler::new(config, ServiceKind::Cms);
        assert!(cms.execute(true).await.is_err());
    }

    #[tokio::test]
    async fn test_serve_handler_normal_returns_ok() {
        let handler = ServeCommandHandler::new(create_valid_config(), ServiceKind::Cms);

        let result = handler.execute(false).await;
        assert!(result.is_ok());
    }
}
