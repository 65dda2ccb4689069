use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub link_service: Arc<LinkService>,
    /// When true, `GET /links` applies the session-gate behavior instead of
    /// being publicly listable.
    pub protect_links_listing: bool,
}
