//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TOKEN_EXPIRY_DAYS;
use crate::domain::value_objects::identity::Identity;

/// Authentication response returned after successful login or registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Bearer token for API authentication
    pub token: String,

    /// Token expiration time in seconds
    pub expires_in: i64,

    /// The authenticated identity
    pub identity: Identity,
}

impl AuthResponse {
    /// Creates a new authentication response with the default expiry window
    pub fn new(token: String, identity: Identity) -> Self {
        Self {
            token,
            expires_in: TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
            identity,
        }
    }
}
