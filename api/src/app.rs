//! Application factory
//!
//! Builds the Actix-web application from an [`AppState`], wiring middleware
//! and routes. Shared between the binary and the integration tests.

use actix_web::body::MessageBody;
use actix_web::{middleware::Logger, web, App, HttpResponse};
use std::sync::Arc;

use ph_core::repositories::UserRepository;
use ph_shared::Environment;

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{login::login, me::me, register::register, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U>(
    app_state: web::Data<AppState<U>>,
    environment: Environment,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody<Error = actix_web::http::Error>>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
{
    let token_service = Arc::clone(&app_state.token_service);
    let cors = create_cors(environment);

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/register", web::post().to(register::<U>))
                    .route("/login", web::post().to(login::<U>))
                    .route(
                        "/me",
                        web::get().to(me).wrap(JwtAuth::new(token_service)),
                    ),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "projecthub-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
