//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`, `GET /create` - Home page (session gated)
//! - `GET/POST /login`, `GET/POST /signup` - Credential flow (open)
//! - `GET/POST /links` - Listing (open by default) and submission (gated)
//! - `GET  /{code}` - Short code resolution (open, matched last)
//! - `/static/*` - Static assets
//!
//! # Middleware
//!
//! - **Sessions** - Signed cookie sessions backed by an in-memory store
//! - **Tracing** - Structured request/response logging

use axum::{Router, routing::get};
use cookie::{Key, time::Duration};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, service::SignedCookie};

use crate::config::Config;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::{fallback_handler, redirect_handler};

/// Builds the session layer from the configured cookie parameters.
///
/// Cookies are signed with a key derived from `SESSION_SECRET` and expire
/// after the configured inactivity window.
///
/// # Panics
///
/// Panics if the secret holds fewer than 32 bytes; [`Config::validate`]
/// rejects such secrets before this is reached.
pub fn session_layer(config: &Config) -> SessionManagerLayer<MemoryStore, SignedCookie> {
    let key = Key::derive_from(config.session_secret.as_bytes());

    SessionManagerLayer::new(MemoryStore::default())
        .with_name(config.session_cookie_name.clone())
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(
            config.session_max_age_secs as i64,
        )))
        .with_signed(key)
}

/// Constructs the application router with all routes and middleware.
///
/// The short-code route uses a single path parameter, so every literal
/// route above takes precedence and unknown single-segment paths fall
/// through to the resolver. Anything deeper than one segment cannot be a
/// short code and lands on the fallback, which sends the browser home the
/// same way an unknown code does.
pub fn app_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .merge(web::routes::protected_routes())
        .merge(web::routes::public_routes())
        .merge(web::routes::link_routes())
        .route("/{code}", get(redirect_handler))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(fallback_handler)
        .layer(session_layer(config))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
