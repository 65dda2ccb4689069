//! User entity for credential storage.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// `password` holds the Argon2id PHC string produced at signup, never the
/// plaintext. Accounts are created on signup, read on every login attempt,
/// and never updated or deleted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
///
/// `password` must already be hashed by the time it reaches the repository.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
