//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod identity;

// Re-export commonly used types
pub use auth_response::AuthResponse;
pub use identity::Identity;
