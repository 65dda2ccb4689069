//! Request and response payloads for the web layer.

pub mod auth;
pub mod links;

pub use auth::CredentialsForm;
pub use links::{CreateLinkRequest, LinkResponse};
