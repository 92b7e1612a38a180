//! Token service for issuing and verifying stateless bearer credentials.
//!
//! Both operations are pure apart from a clock read: no I/O, no shared
//! mutable state, safe to call concurrently from any number of requests.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::identity::Identity;
use crate::errors::{DomainError, TokenError};

use super::config::TokenConfig;

/// Service producing and validating bearer credentials without server-side
/// session storage
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        // No leeway: the expiry boundary must be exact, not fuzzed.
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed token embedding the given identity.
    ///
    /// All identity fields must be present and non-empty. The returned token
    /// verifies back to an equal payload until its expiry elapses.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token
    /// * `Err(DomainError)` - Incomplete identity or signing failure
    pub fn issue(&self, identity: &Identity) -> Result<String, DomainError> {
        identity.validate()?;

        let mut claims = Claims::new(identity, self.config.expiry_days);
        claims.iss = self.config.issuer.clone();
        claims.aud = self.config.audience.clone();
        self.encode_claims(&claims)
    }

    /// Verifies an untrusted token string and returns the embedded identity.
    ///
    /// Fails closed: a malformed string, a signature mismatch, unparsable
    /// claims, and an elapsed expiry all produce the same opaque
    /// [`TokenError::InvalidToken`]. The specific reason is logged at debug
    /// level but never surfaced to the caller. Never panics on untrusted
    /// input.
    pub fn verify(&self, token: &str) -> Result<Identity, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(reason = %e, "token rejected");
                TokenError::InvalidToken
            })?;

        // jsonwebtoken treats a token at exactly `exp` as still live; the
        // expiry bound here is exclusive, so re-check against the claims.
        if token_data.claims.is_expired() {
            tracing::debug!("token rejected: expired");
            return Err(TokenError::InvalidToken.into());
        }

        Ok(token_data.claims.identity())
    }

    /// Encodes claims into a signed token string
    fn encode_claims(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed.into())
    }
}
