//! Signup page and signup form handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use tower_sessions::Session;

use crate::application::services::SignupOutcome;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::CredentialsForm;
use crate::web::session::{USERNAME_KEY, session_error};

/// Template for the signup page.
#[derive(Template, WebTemplate)]
#[template(path = "signup.html")]
struct SignupTemplate {}

/// Renders the signup form.
///
/// # Endpoint
///
/// `GET /signup`
pub async fn signup_page_handler() -> impl IntoResponse {
    SignupTemplate {}
}

/// Creates an account.
///
/// # Endpoint
///
/// `POST /signup`
///
/// A taken username silently redirects to `/login` without creating a
/// second row. Otherwise the password is hashed, the user persisted, the
/// username attached to the session, and the browser sent home.
pub async fn signup_handler(
    session: Session,
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Redirect, AppError> {
    match state
        .auth_service
        .signup(&form.username, &form.password)
        .await?
    {
        SignupOutcome::Created(user) => {
            session
                .insert(USERNAME_KEY, &user.username)
                .await
                .map_err(session_error)?;
            Ok(Redirect::to("/"))
        }
        SignupOutcome::UsernameTaken => Ok(Redirect::to("/login")),
    }
}
