use actix_web::{web, HttpResponse};
use validator::Validate;

use ph_core::repositories::UserRepository;

use crate::dto::auth_dto::{AuthResponse, LoginRequest};
use crate::dto::ErrorResponse;
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Authenticates by email and password and returns a bearer token.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "a@b.com",
///     "password": "..."
/// }
/// ```
///
/// # Responses
/// - 200 OK: `{ "token": "...", "expires_in": 2592000, "user": { ... } }`
/// - 400 Bad Request: malformed request
/// - 401 Unauthorized: unknown email or wrong password (indistinguishable)
pub async fn login<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
{
    if let Err(errors) = request.validate() {
        let mut details = std::collections::HashMap::new();
        details.insert("validation_errors".to_string(), serde_json::json!(errors));

        return HttpResponse::BadRequest().json(
            ErrorResponse::new("validation_error", "Invalid request data")
                .with_details(details),
        );
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Ok().json(AuthResponse::from(response)),
        Err(error) => handle_domain_error(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn test_login_request_validation() {
        let request = LoginRequest {
            email: "a@b.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(request.validate().is_ok());

        let request = LoginRequest {
            email: String::new(),
            password: "password123".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
