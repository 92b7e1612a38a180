//! Configuration for the token service

use jsonwebtoken::Algorithm;

use crate::domain::entities::token::{JWT_AUDIENCE, JWT_ISSUER, TOKEN_EXPIRY_DAYS};

/// Configuration for the token service.
///
/// There is deliberately no `Default` implementation: the signing secret is
/// explicit constructor-injected configuration, never an implicit fallback.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Signing secret
    pub secret: String,
    /// Signing algorithm
    pub algorithm: Algorithm,
    /// Token expiry in days
    pub expiry_days: i64,
    /// Issuer claim stamped into issued tokens and required on verify
    pub issuer: String,
    /// Audience claim stamped into issued tokens and required on verify
    pub audience: String,
}

impl TokenConfig {
    /// Creates a configuration with the standard expiry window
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            expiry_days: TOKEN_EXPIRY_DAYS,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }

    /// Builds the configuration from the shared JWT configuration.
    ///
    /// An unrecognized algorithm name falls back to HS256.
    pub fn from_jwt_config(config: &ph_shared::JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            algorithm: config.algorithm.parse().unwrap_or(Algorithm::HS256),
            expiry_days: config.expiry_days,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        }
    }

    /// Overrides the expiry window
    pub fn with_expiry_days(mut self, days: i64) -> Self {
        self.expiry_days = days;
        self
    }
}
