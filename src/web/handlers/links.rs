//! Link submission and listing handlers.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use tower_sessions::Session;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::{CreateLinkRequest, LinkResponse};
use crate::web::session::{ACCESS_DENIED, ERROR_KEY, SessionUser, USERNAME_KEY};

/// Creates a short link for an authenticated submission.
///
/// # Endpoint
///
/// `POST /links` (session gated via the [`SessionUser`] extractor)
///
/// # Request Flow
///
/// 1. Reject syntactically invalid URLs with 404 (logged, not surfaced)
/// 2. Return the existing link when the URL was already shortened
/// 3. Otherwise resolve the page title, generate a code, and persist
///
/// # Errors
///
/// Returns 404 on an invalid URL or a failed title fetch; nothing is
/// persisted in either case. An authenticated session whose username no
/// longer resolves to a user row is an invariant violation and maps to 500.
pub async fn create_link_handler(
    SessionUser(username): SessionUser,
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    if let Err(e) = payload.validate() {
        tracing::warn!(url = %payload.url, error = %e, "rejected link submission");
        return Err(AppError::not_found("Not a valid url", json!({})));
    }

    let user = state
        .auth_service
        .find_user(&username)
        .await?
        .ok_or_else(|| {
            AppError::internal(
                "Authenticated session references unknown user",
                json!({ "username": username }),
            )
        })?;

    let base_url = headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let link = state
        .link_service
        .submit(payload.url, base_url, user.id)
        .await?;

    Ok(Json(link.into()))
}

/// Lists every link as its full attribute set.
///
/// # Endpoint
///
/// `GET /links`
///
/// Open by default; when `PROTECT_LINKS_ROUTE` is enabled the session gate
/// behavior applies here too. The collection is fetched fresh from
/// persistence on every request, with no pagination and no filtering.
pub async fn list_links_handler(
    session: Session,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if state.protect_links_listing {
        let authenticated = matches!(
            session.get::<String>(USERNAME_KEY).await,
            Ok(Some(ref username)) if !username.is_empty()
        );

        if !authenticated {
            session
                .insert(ERROR_KEY, ACCESS_DENIED)
                .await
                .map_err(crate::web::session::session_error)?;
            return Ok(Redirect::to("/login").into_response());
        }
    }

    let links = state.link_service.list_links().await?;
    let body: Vec<LinkResponse> = links.into_iter().map(LinkResponse::from).collect();

    Ok(Json(body).into_response())
}
