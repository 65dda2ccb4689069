//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with metadata and a visit counter.
///
/// `url` and `code` are both unique: resubmitting a known URL returns the
/// existing row instead of creating a duplicate. `visits` is monotonically
/// increasing and only ever mutated through an atomic update keyed by `code`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub url: String,
    pub title: String,
    /// Origin header of the request that created the link, when present.
    pub base_url: Option<String>,
    pub user_id: i64,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new link.
///
/// `title` is resolved from the target page before the row is persisted;
/// link creation is aborted when that resolution fails.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub url: String,
    pub title: String,
    pub base_url: Option<String>,
    pub user_id: i64,
}
