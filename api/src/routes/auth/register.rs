use actix_web::{web, HttpResponse};
use validator::Validate;

use ph_core::repositories::UserRepository;

use crate::dto::auth_dto::{AuthResponse, RegisterRequest};
use crate::dto::ErrorResponse;
use crate::handlers::error::handle_domain_error;

use super::AppState;

/// Handler for POST /api/v1/auth/register
///
/// Registers a new user and returns a bearer token for them.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "a@b.com",
///     "name": "Alice",
///     "password": "at least 8 chars"
/// }
/// ```
///
/// # Responses
/// - 201 Created: `{ "token": "...", "expires_in": 2592000, "user": { ... } }`
/// - 400 Bad Request: invalid email, name, or password
/// - 409 Conflict: email already registered
pub async fn register<U>(
    state: web::Data<AppState<U>>,
    request: web::Json<RegisterRequest>,
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
        .register(&request.email, &request.name, &request.password)
        .await
    {
        Ok(response) => HttpResponse::Created().json(AuthResponse::from(response)),
        Err(error) => handle_domain_error(error),
    }
}
