//! # Shortly
//!
//! A small-team URL shortener built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities, repository traits,
//!   and the title-resolution contract
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence and the
//!   HTTP title fetcher
//! - **Web Layer** ([`web`]) - Handlers, templates, session gate, and routes
//!
//! ## Features
//!
//! - Cookie sessions with signed cookies and a configurable expiry
//! - Argon2id password hashing for signup/login
//! - Idempotent link submission with page-title resolution
//! - Redirects with click logging and an atomic visit counter
//!
//! ## Quick Start
//!
//! ```bash
//! # Set the one required environment variable
//! export SESSION_SECRET="change-me-to-at-least-32-bytes!!"
//!
//! # Start the service (migrations run automatically)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, LinkService};
    pub use crate::domain::TitleFetcher;
    pub use crate::domain::entities::{Click, Link, NewLink, User};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
