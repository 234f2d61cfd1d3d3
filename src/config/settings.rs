//! Application settings loaded from layered TOML configuration.
//!
//! Every section deserializes with serde defaults so a minimal
//! `default.toml` only needs the values that differ per deployment.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::LoggerConfig;

/// Top-level application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Application identity (name, version)
    #[serde(default)]
    pub application: ApplicationConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection configuration
    pub database: DatabaseConfig,
    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerConfig,
    /// JWT configuration (used by the CMS service)
    #[serde(default)]
    pub jwt: JwtConfig,
}

impl Settings {
    /// Validates all sections.
    ///
    /// JWT settings are validated separately by the service that uses them,
    /// since the app-store service never signs tokens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.logger
            .validate()
            .map_err(|e| ConfigError::validation("logger".to_string(), e.to_string()))?;
        Ok(())
    }
}

/// Application identity configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Human-readable service name, reported by health endpoints
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Service version string
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

fn default_app_name() -> String {
    "dunes-backend".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive_timeout")]
    pub keep_alive_timeout: u64,
}

impl ServerConfig {
    /// Returns the bind address as `host:port`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the server configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation("server.host", "host must not be empty"));
        }
        if self.port == 0 {
            return Err(ConfigError::validation("server.port", "port must be between 1 and 65535"));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            keep_alive_timeout: default_keep_alive_timeout(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_keep_alive_timeout() -> u64 {
    75
}

/// Database connection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,
    /// Maximum number of pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of pooled connections
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Connection acquisition timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl DatabaseConfig {
    /// Validates the database configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::validation("database.url", "database URL must not be empty"));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "max_connections must be greater than 0",
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections",
                "min_connections must not exceed max_connections",
            ));
        }
        if self.connection_timeout == 0 {
            return Err(ConfigError::validation(
                "database.connection_timeout",
                "connection_timeout must be greater than 0",
            ));
        }
        Ok(())
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

/// JWT configuration for token generation and validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Secret key used to sign tokens (HS256)
    #[serde(default)]
    pub secret: String,
    /// Token lifetime in seconds
    #[serde(default = "default_jwt_expiration")]
    pub expiration: i64,
}

impl JwtConfig {
    /// Validates the JWT configuration.
    ///
    /// The secret must be non-empty and at least 32 characters to provide
    /// adequate HMAC key entropy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::validation("jwt.secret", "JWT secret must not be empty"));
        }
        if self.secret.len() < 32 {
            return Err(ConfigError::validation(
                "jwt.secret",
                "JWT secret must be at least 32 characters",
            ));
        }
        if self.expiration <= 0 {
            return Err(ConfigError::validation(
                "jwt.expiration",
                "expiration must be greater than 0 seconds",
            ));
        }
        Ok(())
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiration: default_jwt_expiration(),
        }
    }
}

// Sessions last 7 days.
fn default_jwt_expiration() -> i64 {
    604_800
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_database_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "postgres://localhost/test".to_string(),
            max_connections: 10,
            min_connections: 1,
            connection_timeout: 30,
        }
    }

    #[test]
    fn test_settings_defaults_from_minimal_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [database]
            url = "postgres://localhost/minimal"
            "#,
        )
        .expect("minimal settings should deserialize");

        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.database.url, "postgres://localhost/minimal");
        assert_eq!(settings.database.max_connections, 10);
        assert_eq!(settings.jwt.expiration, 604_800);
        assert!(settings.jwt.secret.is_empty());
        assert_eq!(settings.logger.level, "info");
    }

    #[test]
    fn test_server_address() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            ..ServerConfig::default()
        };
        assert_eq!(server.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_validate_rejects_port_zero() {
        let server = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(server.validate().is_err());
    }

    #[test]
    fn test_database_validate() {
        assert!(test_database_config().validate().is_ok());

        let empty_url = DatabaseConfig {
            url: "  ".to_string(),
            ..test_database_config()
        };
        assert!(empty_url.validate().is_err());

        let inverted_pool = DatabaseConfig {
            min_connections: 20,
            max_connections: 10,
            ..test_database_config()
        };
        assert!(inverted_pool.validate().is_err());
    }

    #[test]
    fn test_jwt_validate_rejects_empty_secret() {
        let jwt = JwtConfig::default();
        assert!(jwt.validate().is_err());
    }

    #[test]
    fn test_jwt_validate_rejects_short_secret() {
        let jwt = JwtConfig {
            secret: "too-short".to_string(),
            expiration: 604_800,
        };
        assert!(jwt.validate().is_err());
    }

    #[test]
    fn test_jwt_validate_accepts_long_secret() {
        let jwt = JwtConfig {
            secret: "0123456789abcdef0123456789abcdef".to_string(),
            expiration: 604_800,
        };
        assert!(jwt.validate().is_ok());
    }

    #[test]
    fn test_jwt_default_expiration_is_seven_days() {
        assert_eq!(JwtConfig::default().expiration, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_settings_validate_accepts_missing_jwt_secret() {
        // The app-store service loads settings without any JWT section.
        let settings: Settings = toml::from_str(
            r#"
            [database]
            url = "postgres://localhost/appstore"
            "#,
        )
        .unwrap();
        assert!(settings.validate().is_ok());
    }

    prop_compose! {
        fn arb_server_config()(
            host in "[a-z][a-z0-9.-]{0,20}",
            port in 1u16..,
            request_timeout in 1u64..3600,
            keep_alive_timeout in 1u64..3600,
        ) -> ServerConfig {
            ServerConfig { host, port, request_timeout, keep_alive_timeout }
        }
    }

    prop_compose! {
        fn arb_database_config()(
            db in "[a-z][a-z0-9_]{0,16}",
            max_connections in 1u32..100,
            min_connections in 0u32..100,
            connection_timeout in 1u64..300,
        ) -> DatabaseConfig {
            DatabaseConfig {
                url: format!("postgres://localhost/{}", db),
                max_connections,
                min_connections,
                connection_timeout,
            }
        }
    }

    prop_compose! {
        fn arb_jwt_config()(
            secret in "[a-zA-Z0-9]{32,64}",
            expiration in 1i64..10_000_000,
        ) -> JwtConfig {
            JwtConfig { secret, expiration }
        }
    }

    prop_compose! {
        fn arb_settings()(
            name in "[a-z][a-z0-9-]{0,20}",
            version in "[0-9]\\.[0-9]\\.[0-9]",
            server in arb_server_config(),
            database in arb_database_config(),
            jwt in arb_jwt_config(),
        ) -> Settings {
            Settings {
                application: ApplicationConfig { name, version },
                server,
                database,
                logger: LoggerConfig::default(),
                jwt,
            }
        }
    }

    proptest! {
        #[test]
        fn test_settings_toml_round_trip(settings in arb_settings()) {
            let serialized = toml::to_string(&settings).expect("settings should serialize");
            let deserialized: Settings =
                toml::from_str(&serialized).expect("settings should deserialize");
            prop_assert_eq!(settings, deserialized);
        }
    }
}
