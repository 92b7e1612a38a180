//! CORS middleware configuration for cross-origin requests.
//!
//! Environment-aware: permissive in development, origin-listed in
//! production. Clients authenticate with a bearer token in the
//! `Authorization` header; no cookies are involved, so credentials support
//! is not enabled.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use ph_shared::Environment;
use std::env;

/// Creates a CORS middleware instance configured for the current environment
pub fn create_cors(environment: Environment) -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .unwrap_or_else(|_| "3600".to_string())
        .parse::<usize>()
        .unwrap_or(3600);

    if environment.is_production() {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

/// Permissive configuration for development and staging
fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(max_age)
}

/// Restrictive configuration for production: only origins listed in
/// `ALLOWED_ORIGINS` may call the API.
fn create_production_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(max_age);

    if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
        for origin in allowed_origins.split(',').map(|s| s.trim()) {
            if !origin.is_empty() {
                log::info!("Adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_development_cors() {
        let _cors = create_cors(Environment::Development);
    }

    #[test]
    fn test_create_production_cors() {
        env::set_var("ALLOWED_ORIGINS", "https://app.projecthub.dev");
        let _cors = create_cors(Environment::Production);
        env::remove_var("ALLOWED_ORIGINS");
    }
}
