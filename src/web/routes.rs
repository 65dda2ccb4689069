//! Web route configuration.

use axum::{Router, middleware, routing::get};

use crate::state::AppState;
use crate::web::handlers::{
    create_link_handler, home_handler, list_links_handler, login_handler, login_page_handler,
    signup_handler, signup_page_handler,
};
use crate::web::middleware::session_gate;

/// Page routes behind the session gate.
///
/// # Endpoints
///
/// - `GET /`       - Home page
/// - `GET /create` - Home page (link creation form)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/create", get(home_handler))
        .route_layer(middleware::from_fn(session_gate::layer))
}

/// Credential-flow routes, always open.
///
/// # Endpoints
///
/// - `GET  /login`  - Login form
/// - `POST /login`  - Credential check
/// - `GET  /signup` - Signup form
/// - `POST /signup` - Account creation
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page_handler).post(login_handler))
        .route("/signup", get(signup_page_handler).post(signup_handler))
}

/// Link routes.
///
/// `POST /links` is gated through the `SessionUser` extractor inside the
/// handler; `GET /links` checks the configurable protection flag itself, so
/// no route-level gate is applied here.
pub fn link_routes() -> Router<AppState> {
    Router::new().route("/links", get(list_links_handler).post(create_link_handler))
}
