//! Handler for short code resolution.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short code and redirects to its destination.
///
/// # Endpoint
///
/// `GET /{code}` (catch-all, matched after every literal route)
///
/// # Request Flow
///
/// 1. Unknown code: silent redirect to the home page, nothing recorded
/// 2. Known code: the click row is written and the visit counter bumped
///    before the 307 to the stored destination is produced
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    match state.link_service.resolve(&code).await? {
        Some(target) => Ok(Redirect::temporary(&target)),
        None => Ok(Redirect::to("/")),
    }
}

/// Answers any request no other route matched.
///
/// Multi-segment paths cannot be short codes, but they get the same
/// treatment as an unknown code: nothing is recorded and the browser is
/// sent home instead of a bare 404.
pub async fn fallback_handler() -> Redirect {
    Redirect::to("/")
}
