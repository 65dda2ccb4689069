//! Session keys and the authenticated-identity extractor.

use axum::{extract::FromRequestParts, http::request::Parts, response::Redirect};
use serde_json::json;
use tower_sessions::Session;

use crate::error::AppError;

/// Session key holding the authenticated username.
pub const USERNAME_KEY: &str = "username";

/// Session key holding the last access-denied reason.
pub const ERROR_KEY: &str = "error";

/// Message stored when an unauthenticated request hits a gated route.
pub const ACCESS_DENIED: &str = "Access denied!";

/// The authenticated identity attached to the current session.
///
/// Extraction succeeds only when the session holds a non-empty username.
/// Otherwise the access-denied message is written to the session and the
/// request is answered with a redirect to the login page, which is the same
/// behavior the session-gate middleware enforces for page routes.
pub struct SessionUser(pub String);

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| Redirect::to("/login"))?;

        match session.get::<String>(USERNAME_KEY).await {
            Ok(Some(username)) if !username.is_empty() => Ok(SessionUser(username)),
            _ => {
                let _ = session.insert(ERROR_KEY, ACCESS_DENIED).await;
                Err(Redirect::to("/login"))
            }
        }
    }
}

/// Maps a session-store failure to a generic internal error.
pub fn session_error(e: tower_sessions::session::Error) -> AppError {
    tracing::error!(error = %e, "session store error");
    AppError::internal("Session store error", json!({}))
}
