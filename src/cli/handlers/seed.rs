//! Seed command handler
//!
//! Populates the CMS database with demo data. Only wired up for the cms
//! binary; the executor rejects it for the store service.

use crate::config::settings::Settings;
use crate::db::establish_async_connection_pool;
use crate::error::AppResult;
use crate::seed::{DEMO_PASSWORD, seed_demo_data};

/// Handler for the seed command
pub struct SeedCommandHandler {
    config: Settings,
}

impl SeedCommandHandler {
    /// Create a new seed command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the seed command
    ///
    /// # Errors
    /// - Database connection errors
    /// - `AppError::Validation` if the database already contains users
    pub async fn execute(&self) -> AppResult<()> {
        self.config.database.validate()?;

        println!("Seeding demo data...");

        let pool = establish_async_connection_pool(&self.config.database).await?;
        let summary = seed_demo_data(&pool).await?;

        println!(
            "✓ Seeded {} clubs, {} users, {} games, {} stat lines, {} training sessions, {} news items",
            summary.clubs,
            summary.users,
            summary.games,
            summary.statistics,
            summary.training_sessions,
            summary.news_items
        );
        println!("All demo users log in with password '{}'", DEMO_PASSWORD);

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

    #[tokio::test]
    async fn test_seed_handler_rejects_empty_database_url() {
        let config = Settings {
            application: ApplicationConfig::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: String::new(),
                max_connections: 10,
                min_connections: 1,
                connection_timeout: 30,
            },
            logger: LoggerConfig::default(),
            jwt: JwtConfig::default(),
        };
        let handler = SeedCommandHandler::new(config);

        let result = handler.execute().await;
        assert!(result.is_err());
    }
}
