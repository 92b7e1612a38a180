//! Authentication route handlers
//!
//! - User registration
//! - Email/password login
//! - Identity echo for the current bearer

pub mod login;
pub mod me;
pub mod register;

use std::sync::Arc;

use ph_core::repositories::UserRepository;
use ph_core::services::auth::AuthService;
use ph_core::services::token::TokenService;

/// Shared application state injected into handlers
pub struct AppState<U>
where
    U: UserRepository,
{
    /// Authentication service
    pub auth_service: Arc<AuthService<U>>,
    /// Token service, shared with the auth middleware
    pub token_service: Arc<TokenService>,
}
