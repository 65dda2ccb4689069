//! Utility functions used across the application.
//!
//! - [`code_generator`] - Random short code generation
//! - [`password`] - Argon2id password hashing and verification

pub mod code_generator;
pub mod password;
