//! Errors produced while loading or validating configuration.

use thiserror::Error;

/// Configuration error taxonomy.
///
/// Loader errors (missing files, parse failures, conflicting environment
/// variables) and validation errors share this one type so callers only
/// need a single `Result` shape for the whole configuration phase.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// A loaded value failed a settings-level check.
    #[error("Validation error: {field} - {message}")]
    ValidationError { field: String, message: String },

    /// An environment variable held an unrecognized value.
    #[error("Environment variable error: {0}")]
    EnvVarError(String),

    /// Two configuration sources were set that cannot be combined.
    #[error("Mutual exclusivity error: {0}")]
    MutualExclusivityError(String),

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn file_not_found(path: impl Into<String>) -> Self {
        ConfigError::FileNotFound(path.into())
    }

    pub fn mutual_exclusivity(message: impl Into<String>) -> Self {
        ConfigError::MutualExclusivityError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::validation("server.port", "port must be between 1 and 65535");
        assert_eq!(
            err.to_string(),
            "Validation error: server.port - port must be between 1 and 65535"
        );
    }

    #[test]
    fn test_file_not_found_display() {
        let err = ConfigError::file_not_found("config/cms/default.toml");
        assert!(err.to_string().contains("config/cms/default.toml"));
    }
}
