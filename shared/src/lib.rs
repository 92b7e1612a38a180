//! Shared utilities and common types for the ProjectHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Common response structures

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError, Environment, JwtConfig, ServerConfig};
pub use types::ErrorResponse;
