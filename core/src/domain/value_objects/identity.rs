//! Identity payload carried inside bearer tokens.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::{User, UserRole};
use crate::errors::{DomainError, ValidationError};

/// The authenticated principal's attributes as embedded in a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque unique identifier
    pub id: String,

    /// Unique identifier used for login lookup
    pub email: String,

    /// Display name
    pub name: String,

    /// Privilege level
    pub role: UserRole,
}

impl Identity {
    /// Ensures every field is present and non-empty.
    ///
    /// Token issuance requires a complete payload; an identity with a blank
    /// field would round-trip but is a caller bug, so it is rejected up
    /// front.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, value) in [
            ("id", &self.id),
            ("email", &self.email),
            ("name", &self.name),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::RequiredField {
                    field: field.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}
