//! Bearer-token authentication middleware for protecting API endpoints.
//!
//! Extracts tokens from the `Authorization` header, verifies them through
//! the core token service, and injects the authenticated identity into
//! request extensions. A missing header, a malformed header, and every
//! verification failure produce the same 401 response.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use ph_core::domain::entities::user::UserRole;
use ph_core::domain::value_objects::Identity;
use ph_core::services::token::TokenService;

use crate::handlers::error::unauthorized_response;

/// Authenticated principal injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID from the token payload
    pub id: String,
    /// Email address of the principal
    pub email: String,
    /// Display name of the principal
    pub name: String,
    /// Privilege level of the principal
    pub role: UserRole,
}

impl From<Identity> for AuthContext {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email,
            name: identity.name,
            role: identity.role,
        }
    }
}

/// Bearer-token authentication middleware factory.
///
/// The token service is injected at construction; the middleware reads no
/// process environment of its own.
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates the middleware around a shared token service
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// Bearer-token authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(unauthorized_error()),
            };

            let identity = match token_service.verify(&token) {
                Ok(identity) => identity,
                Err(_) => return Err(unauthorized_error()),
            };

            req.extensions_mut().insert(AuthContext::from(identity));

            service.call(req).await
        })
    }
}

/// Extracts a Bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// The single 401 error used for every authentication failure
fn unauthorized_error() -> Error {
    InternalError::from_response("unauthorized", unauthorized_response()).into()
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(unauthorized_error);

        ready(result)
    }
}
