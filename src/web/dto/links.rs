//! DTOs for link submission and listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request body for `POST /links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The destination URL (must be a valid absolute HTTP/HTTPS URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,
}

/// Full attribute set of a link, as returned by the submission and listing
/// endpoints.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub url: String,
    pub title: String,
    pub base_url: Option<String>,
    pub user_id: i64,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            url: link.url,
            title: link.title,
            base_url: link.base_url,
            user_id: link.user_id,
            visits: link.visits,
            created_at: link.created_at,
        }
    }
}
