//! Session-gate middleware for page routes.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::web::session::SessionUser;

/// Lets a request through only when an authenticated identity is attached
/// to the current session.
///
/// On a missing or empty identity the [`SessionUser`] extractor has already
/// written the access-denied message to the session; this middleware then
/// answers with a redirect to `/login` instead of running the route.
pub async fn layer(user: Result<SessionUser, Redirect>, req: Request, next: Next) -> Response {
    match user {
        Ok(_) => next.run(req).await,
        Err(redirect) => redirect.into_response(),
    }
}
