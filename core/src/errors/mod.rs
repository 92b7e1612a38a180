//! Domain-specific error types and error handling.
//!
//! Error messages are mapped to HTTP responses in the presentation layer;
//! nothing here carries status codes.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Credential check failed. Deliberately covers both "no such user" and
    /// "wrong password" so the login endpoint cannot be used as an account
    /// existence oracle.
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed")]
    PasswordHashFailure,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    /// The single per-request failure outcome of verification. Malformed
    /// input, signature mismatch, unparsable claims, and expiry all collapse
    /// here; the caller is never told which check failed.
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
