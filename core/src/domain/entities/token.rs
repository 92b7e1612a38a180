//! Token claims for JWT-based stateless authentication.
//!
//! A token carries the full identity payload plus issuance and expiry
//! timestamps; there is no server-side session record. Validity is a pure
//! function of the token contents, the signing secret, and the clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::identity::Identity;
use crate::domain::entities::user::UserRole;

/// Token expiration time (30 days)
pub const TOKEN_EXPIRY_DAYS: i64 = 30;

/// JWT issuer
pub const JWT_ISSUER: &str = "projecthub";

/// JWT audience
pub const JWT_AUDIENCE: &str = "projecthub-api";

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Email address of the subject
    pub email: String,

    /// Display name of the subject
    pub name: String,

    /// Privilege level of the subject
    pub role: UserRole,

    /// Issued at timestamp (seconds since epoch)
    pub iat: i64,

    /// Expiration timestamp (seconds since epoch, exclusive bound)
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an identity, expiring `expiry_days` from now
    pub fn new(identity: &Identity, expiry_days: i64) -> Self {
        let now = Utc::now();
        Self::at(identity, expiry_days, now)
    }

    /// Creates new claims with an explicit issuance instant
    pub fn at(identity: &Identity, expiry_days: i64, issued_at: DateTime<Utc>) -> Self {
        let expiry = issued_at + Duration::days(expiry_days);

        Self {
            sub: identity.id.clone(),
            email: identity.email.clone(),
            name: identity.name.clone(),
            role: identity.role,
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks whether the claims are expired at the given instant.
    ///
    /// The upper bound is exclusive: a token checked at exactly `exp` is
    /// already expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Checks whether the claims are expired right now
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Extracts the identity payload carried by these claims
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.sub.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_identity() -> Identity {
        Identity {
            id: Uuid::new_v4().to_string(),
            email: "a@b.com".to_string(),
            name: "A".to_string(),
            role: UserRole::Admin,
        }
    }

    #[test]
    fn test_claims_carry_identity() {
        let identity = test_identity();
        let claims = Claims::new(&identity, TOKEN_EXPIRY_DAYS);

        assert_eq!(claims.sub, identity.id);
        assert_eq!(claims.email, identity.email);
        assert_eq!(claims.name, identity.name);
        assert_eq!(claims.role, UserRole::Admin);
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert_eq!(claims.identity(), identity);
    }

    #[test]
    fn test_expiry_window() {
        let identity = test_identity();
        let claims = Claims::new(&identity, TOKEN_EXPIRY_DAYS);

        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRY_DAYS * 24 * 60 * 60);
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let identity = test_identity();
        let issued_at = Utc::now();
        let claims = Claims::at(&identity, TOKEN_EXPIRY_DAYS, issued_at);

        let expiry = DateTime::from_timestamp(claims.exp, 0).unwrap();

        // One second before the boundary: still valid
        assert!(!claims.is_expired_at(expiry - Duration::seconds(1)));
        // Exactly at the boundary: expired
        assert!(claims.is_expired_at(expiry));
        // After the boundary: expired
        assert!(claims.is_expired_at(expiry + Duration::seconds(1)));
    }

    #[test]
    fn test_jti_is_unique_per_token() {
        let identity = test_identity();
        let a = Claims::new(&identity, TOKEN_EXPIRY_DAYS);
        let b = Claims::new(&identity, TOKEN_EXPIRY_DAYS);
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new(&test_identity(), TOKEN_EXPIRY_DAYS);

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }
}
