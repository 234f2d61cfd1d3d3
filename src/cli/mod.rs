//! Command-line interface shared by the two service binaries.
//!
//! Provides argument parsing with clap, merging of CLI overrides into the
//! layered file configuration, and handlers for the serve, migrate, and
//! seed commands. Each binary parses the same `Cli` and passes its own
//! `ServiceKind` so configuration directories and migrations resolve to
//! the right service.

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands};

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::logger::init_logger;
use crate::server::ServiceKind;

/// Load the layered configuration for a service and apply CLI overrides.
///
/// The `--config` flag replaces layered loading with a single file; the
/// `--env` flag forces the environment before any file is read.
///
/// # Errors
/// Returns an error if configuration loading, merging, or validation fails.
pub fn load_and_merge_config(cli: &Cli, kind: ServiceKind) -> anyhow::Result<Settings> {
    if let Some(ref env) = cli.env {
        // Must happen before ConfigLoader reads DUNES_APP_ENV
        unsafe {
            std::env::set_var(
                crate::config::Environment::ENV_VAR,
                crate::config::Environment::from(env.clone()).as_str(),
            );
        }
    }

    let merger =
        ConfigurationMerger::from_config_path(kind.default_config_dir(), cli.config.as_ref())?;
    let settings = merger.merge_cli_args(cli)?;
    Ok(settings)
}

/// Initialize the global tracing subscriber from settings.
///
/// # Errors
/// Returns an error if the logger configuration is invalid or a subscriber
/// is already installed.
pub fn init_logger_from_settings(settings: &Settings) -> AppResult<()> {
    init_logger(&settings.logger).map_err(|source| crate::error::AppError::Internal { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_and_merge_config_from_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[application]
name = "explicit-file-service"

[server]
host = "0.0.0.0"

[database]
url = "postgres://localhost/explicit"
"#
        )
        .unwrap();

        let cli = Cli {
            command: None,
            config: Some(file.path().to_path_buf()),
            env: None,
            verbose: false,
            quiet: false,
        };

        let settings = load_and_merge_config(&cli, ServiceKind::Store).unwrap();
        assert_eq!(settings.application.name, "explicit-file-service");
        assert_eq!(settings.server.host, "0.0.0.0");
    }

    #[test]
    fn test_verbose_flag_overrides_file_log_level() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[database]
url = "postgres://localhost/explicit"

[logger]
level = "warn"
"#
        )
        .unwrap();

        let cli = Cli {
            command: None,
            config: Some(file.path().to_path_buf()),
            env: None,
            verbose: true,
            quiet: false,
        };

        let settings = load_and_merge_config(&cli, ServiceKind::Cms).unwrap();
        assert_eq!(settings.logger.level, "debug");
    }
}
