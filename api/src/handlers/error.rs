//! Mapping from domain errors to HTTP responses.
//!
//! Token failures deliberately collapse to a single 401 body: the client is
//! told it is not authenticated, never which verification step failed.

use actix_web::HttpResponse;
use ph_core::errors::{AuthError, DomainError, TokenError, ValidationError};

use crate::dto::ErrorResponse;

/// Uniform 401 body used for every authentication failure
pub fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new(
        "unauthorized",
        "Authentication required",
    ))
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::debug!("domain error: {:?}", error);

    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::AuthenticationFailed => HttpResponse::Unauthorized().json(
                ErrorResponse::new("authentication_failed", "Invalid email or password"),
            ),
            AuthError::UserAlreadyExists => HttpResponse::Conflict().json(ErrorResponse::new(
                "user_already_exists",
                "A user with this email is already registered",
            )),
            AuthError::UserNotFound => HttpResponse::NotFound().json(ErrorResponse::new(
                "user_not_found",
                "User not found",
            )),
            AuthError::PasswordHashFailure => internal_error(),
        },
        // One opaque outcome for every token failure mode.
        DomainError::Token(TokenError::InvalidToken) => unauthorized_response(),
        DomainError::Token(TokenError::GenerationFailed) => internal_error(),
        DomainError::ValidationErr(validation_error) => match validation_error {
            ValidationError::RequiredField { field } => HttpResponse::BadRequest().json(
                ErrorResponse::new("missing_field", format!("Required field: {}", field)),
            ),
            ValidationError::InvalidFormat { field } => HttpResponse::BadRequest().json(
                ErrorResponse::new("invalid_format", format!("Invalid format: {}", field)),
            ),
        },
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{} not found", resource),
        )),
        DomainError::Internal { .. } => internal_error(),
    }
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        "internal_error",
        "An internal error occurred",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_token_errors_map_to_401() {
        let response = handle_domain_error(TokenError::InvalidToken.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authentication_failed_maps_to_401() {
        let response = handle_domain_error(AuthError::AuthenticationFailed.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_duplicate_user_maps_to_409() {
        let response = handle_domain_error(AuthError::UserAlreadyExists.into());
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err: DomainError = ValidationError::RequiredField {
            field: "email".to_string(),
        }
        .into();
        let response = handle_domain_error(err);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
