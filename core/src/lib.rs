//! # ProjectHub Core
//!
//! Core business logic and domain layer for the ProjectHub backend.
//! This crate contains domain entities, the token and auth services,
//! repository interfaces, and error types that form the foundation of the
//! application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
