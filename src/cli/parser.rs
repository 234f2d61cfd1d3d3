//! CLI argument parsing with clap
//!
//! This module defines the command-line interface shared by the two service
//! binaries, including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Backend services for the Dunes Be One basketball platform
#[derive(Parser, Debug)]
#[command(about = "Backend services for the Dunes Be One basketball platform")]
#[command(long_about = "
The dunes backend ships two services from one codebase: the app-store
catalog API (appstore) and the basketball CMS API (cms). Both binaries
accept the same command-line interface; the seed command only applies to
the CMS.

EXAMPLES:
    # Start the server with default configuration
    cms serve

    # Start server on custom host and port
    cms serve --host 0.0.0.0 --port 8080

    # Use custom configuration file
    appstore --config /path/to/config.toml serve

    # Run in development mode with verbose logging
    cms --env development --verbose serve

    # Check configuration without starting server
    cms serve --dry-run

    # Run database migrations
    appstore migrate

    # Preview pending migrations
    cms migrate --dry-run

    # Rollback last 2 migrations
    cms migrate --rollback 2

    # Populate the CMS database with demo data
    cms seed
")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Specify a custom configuration file to use instead of the layered
    /// per-service directory. The file should be in TOML format and must
    /// exist and be readable.
    ///
    /// Example: --config /etc/dunes/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Force the application to use a specific environment configuration.
    /// This affects which configuration files are loaded and default settings.
    ///
    /// Available values: development (dev), test, staging (stage), production (prod)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level, showing detailed information
    /// about application operations. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only, hiding informational messages.
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Launches the HTTP server with the configured settings. The server will
    /// bind to the specified host and port, load the database connection pool,
    /// and begin accepting requests.
    ///
    /// Examples:
    ///   cms serve                            # Start with defaults
    ///   cms serve --host 0.0.0.0 --port 80   # Bind to all interfaces on port 80
    ///   cms serve --dry-run                  # Validate config without starting
    Serve {
        /// Host address to bind to
        ///
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept connections
        /// from any interface.
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// Must be between 1 and 65535. Ports below 1024 typically require
        /// root privileges.
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Log level override
        ///
        /// Overrides both configuration file settings and the global
        /// --verbose/--quiet flags.
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit
        ///
        /// Performs a complete configuration validation check without starting
        /// the server. Returns exit code 0 if valid, non-zero if invalid.
        #[arg(long)]
        dry_run: bool,
    },
    /// Database migration operations
    ///
    /// Manage database schema migrations. This command connects to the
    /// configured database and applies or rolls back schema changes.
    ///
    /// Examples:
    ///   cms migrate                 # Apply all pending migrations
    ///   cms migrate --dry-run       # Show pending migrations without applying
    ///   cms migrate --rollback 3    # Rollback the last 3 migrations
    Migrate {
        /// Show pending migrations without applying
        ///
        /// Lists all migrations that would be applied without actually running
        /// them. Cannot be used with --rollback.
        #[arg(long, conflicts_with = "rollback")]
        dry_run: bool,

        /// Number of migrations to rollback
        ///
        /// Reverts the specified number of most recent migrations. Use with
        /// caution as this can result in data loss. Must be between 1 and 100.
        /// Cannot be used with --dry-run.
        #[arg(long, value_name = "STEPS", conflicts_with = "dry_run", value_parser = super::validation::validate_rollback_steps)]
        rollback: Option<u32>,
    },
    /// Populate the CMS database with demo data
    ///
    /// Creates demo clubs with managers, coaches, athletes, completed games
    /// with statistics, training sessions, and news. Refuses to run against a
    /// database that already contains users. Only available on the cms binary.
    Seed,
}

/// Environment options
#[derive(ValueEnum, Clone, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

/// Log level options
#[derive(ValueEnum, Clone, Debug)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

impl Cli {
    /// Validate argument combinations beyond what clap enforces.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref command) = self.command {
            match command {
                Commands::Serve { host, port, .. } => {
                    if let (Some(host_addr), Some(port_num)) = (host, port)
                        && host_addr == "0.0.0.0"
                        && *port_num < 1024
                    {
                        return Err(
                            "Binding to 0.0.0.0 on a privileged port (< 1024) typically requires root privileges"
                                .to_string(),
                        );
                    }
                }
                Commands::Migrate { dry_run, rollback } => {
                    if *dry_run && rollback.is_some() {
                        return Err("Cannot use --dry-run and --rollback together".to_string());
                    }
                }
                Commands::Seed => {}
            }
        }

        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        Ok(())
    }

    /// Whether this invocation should start the HTTP server after command
    /// execution.
    pub fn should_serve(&self) -> bool {
        match &self.command {
            None => true,
            Some(Commands::Serve { dry_run, .. }) => !*dry_run,
            Some(_) => false,
        }
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_flag() {
        let result = Cli::try_parse_from(["cms", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["cms", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_default_behavior() {
        let cli = Cli::try_parse_from(["cms"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
        assert!(cli.env.is_none());
        assert!(cli.should_serve());
    }

    #[test]
    fn test_serve_command() {
        let cli =
            Cli::try_parse_from(["cms", "serve", "--host", "0.0.0.0", "--port", "8080"]).unwrap();
        if let Some(Commands::Serve {
            host,
            port,
            log_level: _,
            dry_run,
        }) = cli.command
        {
            assert_eq!(host, Some("0.0.0.0".to_string()));
            assert_eq!(port, Some(8080));
            assert!(!dry_run);
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_serve_dry_run_does_not_serve() {
        let cli = Cli::try_parse_from(["cms", "serve", "--dry-run"]).unwrap();
        assert!(!cli.should_serve());
    }

    #[test]
    fn test_migrate_command() {
        let cli = Cli::try_parse_from(["cms", "migrate", "--dry-run"]).unwrap();
        if let Some(Commands::Migrate { dry_run, rollback }) = cli.command {
            assert!(dry_run);
            assert!(rollback.is_none());
        } else {
            panic!("Expected Migrate command");
        }
    }

    #[test]
    fn test_seed_command() {
        let cli = Cli::try_parse_from(["cms", "seed"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Seed)));
        assert!(!cli.should_serve());
    }

    #[test]
    fn test_migrate_dry_run_conflicts_with_rollback() {
        let result = Cli::try_parse_from(["cms", "migrate", "--dry-run", "--rollback", "2"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let result = Cli::try_parse_from(["cms", "--verbose", "--quiet"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_privileged_port_validation() {
        let cli = Cli::try_parse_from(["cms", "serve", "--host", "0.0.0.0", "--port", "80"])
            .unwrap();
        assert!(cli.validate().is_err());

        let cli = Cli::try_parse_from(["cms", "serve", "--host", "127.0.0.1", "--port", "80"])
            .unwrap();
        assert!(cli.validate().is_ok());
    }
}
