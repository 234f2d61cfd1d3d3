//! Layered configuration for the Dunes services.
//!
//! Settings load from per-service TOML files with environment-variable
//! overrides; see [`loader::ConfigLoader`] for the precedence rules.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{ApplicationConfig, DatabaseConfig, JwtConfig, ServerConfig, Settings};
