//! Login page and login form handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use tower_sessions::Session;

use crate::application::services::LoginOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::CredentialsForm;
use crate::web::session::{ERROR_KEY, USERNAME_KEY, session_error};

/// Template for the login page.
///
/// `error` carries the access-denied message left behind by the session
/// gate, if any; rendering consumes it.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: Option<String>,
}

/// Renders the login form.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_page_handler(session: Session) -> Result<impl IntoResponse, AppError> {
    let error = session
        .remove::<String>(ERROR_KEY)
        .await
        .map_err(session_error)?;

    Ok(LoginTemplate { error })
}

/// Verifies submitted credentials.
///
/// # Endpoint
///
/// `POST /login`
///
/// A match attaches the username to the session and redirects home; an
/// unknown username and a wrong password both redirect back to `/login`
/// without a distinguishing message.
pub async fn login_handler(
    session: Session,
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Redirect, AppError> {
    match state
        .auth_service
        .login(&form.username, &form.password)
        .await?
    {
        LoginOutcome::Authenticated(user) => {
            session
                .insert(USERNAME_KEY, &user.username)
                .await
                .map_err(session_error)?;
            Ok(Redirect::to("/"))
        }
        LoginOutcome::Rejected => Ok(Redirect::to("/login")),
    }
}
