//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{MigrateCommandHandler, SeedCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::{AppError, AppResult};
use crate::server::ServiceKind;

/// Execute a CLI command with the given settings
///
/// This function dispatches to the appropriate command handler based on
/// the parsed CLI arguments. A plain `serve` (or no subcommand) returns
/// Ok without side effects; the binary then starts the server itself.
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `settings` - Merged and validated settings
/// * `kind` - Which service binary is executing
///
/// # Errors
/// Returns errors from command handlers or validation failures
pub async fn execute_command(cli: &Cli, settings: Settings, kind: ServiceKind) -> AppResult<()> {
    validate_command_args(cli)?;

    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) if *dry_run => {
            ServeCommandHandler::new(settings, kind).execute(true).await
        }
        Some(Commands::Serve { .. }) | None => Ok(()),
        Some(Commands::Migrate { dry_run, rollback }) => {
            MigrateCommandHandler::new(settings, kind)
                .execute(*dry_run, *rollback)
                .await
        }
        Some(Commands::Seed) => {
            if kind != ServiceKind::Cms {
                return Err(AppError::Validation {
                    field: "command".to_string(),
                    reason: "seed is only available on the cms binary".to_string(),
                });
            }
            SeedCommandHandler::new(settings).execute().await
        }
    }
}

/// Validate command arguments before execution
fn validate_command_args(cli: &Cli) -> AppResult<()> {
    if let Err(msg) = cli.validate() {
        return Err(AppError::Validation {
            field: "cli_arguments".to_string(),
            reason: msg,
        });
    }

    if let Some(Commands::Migrate { rollback, .. }) = &cli.command
        && let Some(steps) = rollback
        && *steps > 50
    {
        eprintln!(
            "Warning: Rolling back {} migrations is a large operation. Consider using smaller steps.",
            steps
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::Cli;
    use crate::config::{ApplicationConfig, DatabaseConfig, JwtConfig, ServerConfig};
    use crate::logger::LoggerConfig;
    use clap::Parser;

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
    async fn test_execute_serve_dry_run() {
        let cli = Cli::try_parse_from(["cms", "serve", "--dry-run"]).unwrap();
        let config = create_valid_config();

        let result = execute_command(&cli, config, ServiceKind::Cms).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_execute_serve_normal() {
        let cli = Cli::try_parse_from(["cms", "serve"]).unwrap();
        let config = create_valid_config();

        let result = execute_command(&cli, config, ServiceKind::Cms).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_execute_no_command_defaults_to_serve() {
        let cli = Cli::try_parse_from(["appstore"]).unwrap();
        let config = create_valid_config();

        let result = execute_command(&cli, config, ServiceKind::Store).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_execute_seed_rejected_for_store() {
        let cli = Cli::try_parse_from(["appstore", "seed"]).unwrap();
        let config = create_valid_config();

        let result = execute_command(&cli, config, ServiceKind::Store).await;
        assert!(matches!(
            result,
            Err(AppError::Validation { field, .. }) if field == "command"
        ));
    }

    #[tokio::test]
    async fn test_validate_conflicting_args() {
        let cli = Cli {
            command: Some(Commands::Migrate {
                dry_run: true,
                rollback: Some(5),
            }),
            config: None,
            env: None,
            verbose: false,
            quiet: false,
        };

        let result = validate_command_args(&cli);
        assert!(result.is_err());
    }
}
