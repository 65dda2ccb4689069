//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the home page with the link-submission form and the list of
/// existing links.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct IndexTemplate {}

/// Renders the home page.
///
/// # Endpoints
///
/// `GET /` and `GET /create`, both behind the session gate.
pub async fn home_handler() -> impl IntoResponse {
    IndexTemplate {}
}
