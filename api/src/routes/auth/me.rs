use actix_web::HttpResponse;

use crate::dto::auth_dto::UserResponse;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/auth/me
///
/// Returns the identity of the authenticated bearer. The route is wrapped
/// in the auth middleware, so reaching this handler implies a valid token.
pub async fn me(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(UserResponse {
        id: auth.id,
        email: auth.email,
        name: auth.name,
        role: auth.role,
    })
}
