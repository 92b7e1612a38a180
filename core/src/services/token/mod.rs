//! Token service module for stateless bearer credentials
//!
//! This module handles issuance and verification of signed, time-limited
//! tokens. There is no refresh-token storage, revocation list, or cleanup
//! job: session state lives entirely inside the token.

mod config;
mod service;

pub use config::TokenConfig;
pub use service::TokenService;
