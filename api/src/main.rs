//! ProjectHub API server entry point

use std::sync::Arc;

use actix_web::{web, HttpServer};

use ph_api::app::create_app;
use ph_api::routes::auth::AppState;
use ph_core::repositories::InMemoryUserRepository;
use ph_core::services::auth::{AuthService, AuthServiceConfig};
use ph_core::services::token::{TokenConfig, TokenService};
use ph_shared::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Load application configuration, fail fast on misconfiguration
    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Configuration error: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    if config.jwt.is_using_development_secret() {
        log::warn!(
            "Using the built-in development JWT secret; set JWT_SECRET before deploying"
        );
    }

    log::info!(
        "Starting ProjectHub API server at http://{} ({})",
        config.server.bind_address(),
        config.environment
    );

    // Wire up services around an in-memory user store
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let token_service = Arc::new(TokenService::new(TokenConfig::from_jwt_config(&config.jwt)));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repository),
        Arc::clone(&token_service),
        AuthServiceConfig::default(),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        token_service,
    });

    let bind_address = config.server.bind_address();
    let environment = config.environment;
    let workers = config.server.workers;

    let mut server = HttpServer::new(move || create_app(app_state.clone(), environment));

    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(bind_address)?.run().await
}
