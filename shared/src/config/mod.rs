//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing and expiry configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server configuration

pub mod auth;
pub mod environment;
pub mod server;

use thiserror::Error;

// Re-export commonly used types
pub use auth::{JwtConfig, DEVELOPMENT_SECRET};
pub use environment::Environment;
pub use server::ServerConfig;

/// Configuration loading errors. These are startup-fatal: a process that
/// cannot resolve its signing secret must not begin serving requests.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET is not set; a signing secret is required outside development")]
    MissingSecret,

    #[error("JWT_SECRET is empty; an empty signing secret is never permitted")]
    EmptySecret,
}

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment the process runs in
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables.
    ///
    /// Fails when the JWT secret cannot be resolved (see
    /// [`JwtConfig::from_env`]); all other settings fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        Ok(Self {
            environment,
            server: ServerConfig::from_env(),
            jwt: JwtConfig::from_env(environment)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert!(ConfigError::MissingSecret.to_string().contains("JWT_SECRET"));
        assert!(ConfigError::EmptySecret.to_string().contains("empty"));
    }
}
