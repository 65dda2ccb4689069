//! Web layer: browser-facing routes, handlers, and session plumbing.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering and JSON handlers
//! - [`middleware`] - The session gate
//! - [`session`] - Session keys and the `SessionUser` extractor
//! - [`dto`] - Request/response payloads
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;
