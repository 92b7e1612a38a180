//! Configuration for the authentication service

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
    /// Minimum accepted password length
    pub min_password_length: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
            min_password_length: 8,
        }
    }
}

impl AuthServiceConfig {
    /// Low-cost configuration for tests; bcrypt at the default cost makes
    /// test suites noticeably slow.
    pub fn fast() -> Self {
        Self {
            bcrypt_cost: 4,
            min_password_length: 8,
        }
    }
}
