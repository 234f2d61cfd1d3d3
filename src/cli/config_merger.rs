//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based
//! configuration, implementing the configuration precedence logic.

use std::path::PathBuf;

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};

/// Merges CLI argument overrides into file-based configuration.
///
/// CLI arguments have the highest precedence; the layered configuration
/// files (or the single `--config` file) provide the base.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a merger by loading configuration from the given file, or from
    /// the service's layered configuration directory when no file is given.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_config_path(
        default_dir: &str,
        config_path: Option<&PathBuf>,
    ) -> Result<Self, ConfigError> {
        let config = match config_path {
            Some(path) => ConfigLoader::from_file(path).load()?,
            None => ConfigLoader::new(default_dir)?.load()?,
        };

        Ok(Self::new(config))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// # Returns
    /// A new Settings instance with CLI overrides applied
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        self.apply_global_overrides(&mut config, cli);

        if let Some(ref command) = cli.command {
            self.apply_command_overrides(&mut config, command);
        }

        // Validate the merged configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply global CLI argument overrides
    fn apply_global_overrides(&self, config: &mut Settings, cli: &Cli) {
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }
    }

    /// Apply command-specific CLI argument overrides
    fn apply_command_overrides(&self, config: &mut Settings, command: &Commands) {
        match command {
            Commands::Serve {
                host,
                port,
                log_level,
                dry_run: _,
            } => {
                if let Some(host_addr) = host {
                    config.server.host = host_addr.clone();
                }

                if let Some(port_num) = port {
                    config.server.port = *port_num;
                }

                // Command-specific override takes precedence over global flags
                if let Some(level) = log_level {
                    config.logger.level = level.clone().into();
                }
            }
            // Migration and seeding don't override server configuration
            Commands::Migrate { .. } | Commands::Seed => {}
        }
    }

    /// Get the current configuration (useful for inspection)
    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::Cli;
    use crate::config::{ApplicationConfig, DatabaseConfig, JwtConfig, ServerConfig};
    use crate::logger::LoggerConfig;
    use clap::Parser;

    fn create_valid_base_config() -> Settings {
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
    fn test_configuration_merger_new() {
        let base_config = create_valid_base_config();
        let merger = ConfigurationMerger::new(base_config.clone());
        assert_eq!(merger.config(), &base_config);
    }

    #[test]
    fn test_configuration_merger_merge_verbose_flag() {
        let merger = ConfigurationMerger::new(create_valid_base_config());

        let cli = Cli::try_parse_from(["cms", "--verbose"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.logger.level, "debug");
    }

    #[test]
    fn test_configuration_merger_merge_quiet_flag() {
        let merger = ConfigurationMerger::new(create_valid_base_config());

        let cli = Cli::try_parse_from(["cms", "--quiet"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.logger.level, "error");
    }

    #[test]
    fn test_configuration_merger_merge_serve_host_and_port() {
        let merger = ConfigurationMerger::new(create_valid_base_config());

        let cli =
            Cli::try_parse_from(["cms", "serve", "--host", "0.0.0.0", "--port", "8080"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.server.host, "0.0.0.0");
        assert_eq!(merged_config.server.port, 8080);
    }

    #[test]
    fn test_configuration_merger_command_log_level_overrides_global() {
        let merger = ConfigurationMerger::new(create_valid_base_config());

        let cli =
            Cli::try_parse_from(["cms", "--verbose", "serve", "--log-level", "warn"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.logger.level, "warn");
    }

    #[test]
    fn test_configuration_merger_seed_keeps_server_config() {
        let merger = ConfigurationMerger::new(create_valid_base_config());

        let cli = Cli::try_parse_from(["cms", "seed"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.server.port, ServerConfig::default().port);
    }
}
