//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

use super::environment::Environment;
use super::ConfigError;

/// Development-only signing secret, substituted when no `JWT_SECRET` is
/// configured and the process runs in development mode. Callers must log a
/// warning when this value is in use; it is rejected outright in staging and
/// production.
pub const DEVELOPMENT_SECRET: &str = "projecthub-development-secret-do-not-deploy";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token expiry in days
    #[serde(default = "default_expiry_days")]
    pub expiry_days: i64,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// JWT audience claim
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl JwtConfig {
    /// Create a new JWT configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiry_days: default_expiry_days(),
            issuer: default_issuer(),
            audience: default_audience(),
            algorithm: default_algorithm(),
        }
    }

    /// Set token expiry in days
    pub fn with_expiry_days(mut self, days: i64) -> Self {
        self.expiry_days = days;
        self
    }

    /// Load the configuration from environment variables.
    ///
    /// `JWT_SECRET` is mandatory outside development. In development a
    /// flagged default is substituted so the server can start without a
    /// `.env` file. An empty secret is rejected in every environment.
    pub fn from_env(environment: Environment) -> Result<Self, ConfigError> {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(value) => value,
            Err(_) if environment.is_development() => DEVELOPMENT_SECRET.to_string(),
            Err(_) => return Err(ConfigError::MissingSecret),
        };

        if secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        let expiry_days = std::env::var("JWT_EXPIRY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_expiry_days);

        Ok(Self {
            secret,
            expiry_days,
            issuer: default_issuer(),
            audience: default_audience(),
            algorithm: default_algorithm(),
        })
    }

    /// Check if the development fallback secret is in use (security warning)
    pub fn is_using_development_secret(&self) -> bool {
        self.secret == DEVELOPMENT_SECRET
    }
}

fn default_expiry_days() -> i64 {
    30
}

fn default_issuer() -> String {
    String::from("projecthub")
}

fn default_audience() -> String {
    String::from("projecthub-api")
}

fn default_algorithm() -> String {
    String::from("HS256")
}
