//! Authentication service module
//!
//! Registration and login over a [`UserRepository`], issuing bearer tokens
//! on success.
//!
//! [`UserRepository`]: crate::repositories::UserRepository

mod config;
mod service;

pub use config::AuthServiceConfig;
pub use service::AuthService;
