//! Business logic services orchestrating domain operations.

pub mod auth_service;
pub mod link_service;

pub use auth_service::{AuthService, LoginOutcome, SignupOutcome};
pub use link_service::LinkService;
