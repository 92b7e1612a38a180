//! Domain entities representing core business objects.

pub mod token;
pub mod user;

// Re-export commonly used types
pub use token::{Claims, JWT_AUDIENCE, JWT_ISSUER, TOKEN_EXPIRY_DAYS};
pub use user::{User, UserRole};
