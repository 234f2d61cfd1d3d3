//! Migrate command handler
//!
//! Handles database migration operations including dry-run and rollback.
//! Each service binary applies the migrations embedded for its own database.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::MigrationHarness;

use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::server::ServiceKind;

/// Handler for the migrate command
pub struct MigrateCommandHandler {
    config: Settings,
    kind: ServiceKind,
}

impl MigrateCommandHandler {
    /// Create a new migrate command handler
    pub fn new(config: Settings, kind: ServiceKind) -> Self {
        Self { config, kind }
    }

    /// Execute the migrate command with dry-run and rollback support
    ///
    /// # Errors
    /// - Database connection errors
    /// - Migration execution errors
    /// - Configuration validation errors
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        self.config.database.validate()?;

        match (dry_run, rollback) {
            (true, _) => self.show_pending_migrations().await,
            (false, Some(steps)) => self.rollback_migrations(steps).await,
            (false, None) => self.run_migrations().await,
        }
    }

    /// Run a closure against a fresh blocking connection on the migration DB.
    ///
    /// Diesel migration harnesses are synchronous, so everything runs inside
    /// `spawn_blocking` on a dedicated `PgConnection` rather than the async
    /// pool.
    async fn with_connection<T, F>(&self, operation: &'static str, f: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection, ServiceKind) -> AppResult<T> + Send + 'static,
    {
        let database_url = self.config.database.url.clone();
        let kind = self.kind;
        tokio::task::spawn_blocking(move || {
            let mut conn =
                PgConnection::establish(&database_url).map_err(|e| AppError::Database {
                    operation: operation.to_string(),
                    source: anyhow::anyhow!("connection error: {}", e),
                })?;
            f(&mut conn, kind)
        })
        .await
        .map_err(|e| AppError::Internal {
            source: anyhow::Error::from(e),
        })?
    }

    /// Show pending migrations without applying them
    async fn show_pending_migrations(&self) -> AppResult<()> {
        println!("Checking for pending migrations...");

        let pending_count = self
            .with_connection("check pending migrations", |conn, kind| {
                let pending =
                    conn.pending_migrations(kind.migrations())
                        .map_err(|e| AppError::Database {
                            operation: "check pending migrations".to_string(),
                            source: anyhow::anyhow!("migration error: {}", e),
                        })?;
                Ok(pending.len())
            })
            .await?;

        if pending_count == 0 {
            println!("✓ No pending migrations found - database is up to date");
        } else {
            println!("Found {} pending migration(s)", pending_count);
            println!("\nRun without --dry-run to apply these migrations");
        }

        Ok(())
    }

    /// Run pending migrations
    async fn run_migrations(&self) -> AppResult<()> {
        println!("Running database migrations...");

        let applied = self
            .with_connection("run pending migrations", |conn, kind| {
                let applied = conn
                    .run_pending_migrations(kind.migrations())
                    .map_err(|e| AppError::Database {
                        operation: "run pending migrations".to_string(),
                        source: anyhow::anyhow!("migration error: {}", e),
                    })?;
                Ok(applied.iter().map(|m| m.to_string()).collect::<Vec<_>>())
            })
            .await?;

        if applied.is_empty() {
            println!("✓ No migrations to apply - database is already up to date");
        } else {
            println!("✓ Applied {} migration(s):", applied.len());
            for migration in &applied {
                println!("  - {}", migration);
            }
            println!("Database migration completed successfully");
        }

        Ok(())
    }

    /// Rollback the specified number of migrations
    async fn rollback_migrations(&self, steps: u32) -> AppResult<()> {
        if steps == 0 {
            return Err(AppError::Validation {
                field: "rollback_steps".to_string(),
                reason: "Number of rollback steps must be greater than 0".to_string(),
            });
        }

        println!("Rolling back {} migration(s)...", steps);

        let reverted = self
            .with_connection("rollback migrations", move |conn, kind| {
                let applied = conn.applied_migrations().map_err(|e| AppError::Database {
                    operation: "get applied migrations".to_string(),
                    source: anyhow::anyhow!("migration error: {}", e),
                })?;

                if applied.len() < steps as usize {
                    return Err(AppError::Validation {
                        field: "rollback_steps".to_string(),
                        reason: format!(
                            "Cannot rollback {} migrations - only {} applied migrations available",
                            steps,
                            applied.len()
                        ),
                    });
                }

                for _ in 0..steps {
                    conn.revert_last_migration(kind.migrations()).map_err(|e| {
                        AppError::Database {
                            operation: "revert migration".to_string(),
                            source: anyhow::anyhow!("migration rollback error: {}", e),
                        }
                    })?;
                }
                Ok(steps)
            })
            .await?;

        println!("✓ Rolled back {} migration(s)", reverted);
        println!("Migration rollback completed successfully");

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
            jwt: JwtConfig::default(),
        }
    }

    #[test]
    fn test_migrate_handler_new() {
        let config = create_valid_config();
        let handler = MigrateCommandHandler::new(config.clone(), ServiceKind::Cms);
        assert_eq!(handler.config(), &config);
    }

    #[tokio::test]
    async fn test_migrate_handler_zero_rollback_steps() {
        let handler = MigrateCommandHandler::new(create_valid_config(), ServiceKind::Cms);

        let result = handler.execute(false, Some(0)).await;
        assert!(result.is_err());

        if let Err(AppError::Validation { field, reason }) = result {
            assert_eq!(field, "rollback_steps");
            assert!(reason.contains("must be greater than 0"));
        } else {
            panic!("Expected validation error for zero rollback steps");
        }
    }

    #[tokio::test]
    async fn test_migrate_handler_rejects_empty_database_url() {
        let mut config = create_valid_config();
        config.database.url = String::new();
        let handler = MigrateCommandHandler::new(config, ServiceKind::Store);

        let result = handler.execute(true, None).await;
        assert!(result.is_err());
    }
}
