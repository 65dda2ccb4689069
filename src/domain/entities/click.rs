//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a shortened link is resolved.
///
/// Pure append-only audit log: one row per successful resolution, timestamped
/// at creation and never read back by the application.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for recording a new click.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
}
