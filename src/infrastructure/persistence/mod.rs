//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime queries against a shared connection pool.
//!
//! # Repositories
//!
//! - [`SqliteUserRepository`] - Credential storage
//! - [`SqliteLinkRepository`] - Link storage, listing, and the atomic visit increment
//! - [`SqliteClickRepository`] - Append-only click log

pub mod sqlite_click_repository;
pub mod sqlite_link_repository;
pub mod sqlite_user_repository;

pub use sqlite_click_repository::SqliteClickRepository;
pub use sqlite_link_repository::SqliteLinkRepository;
pub use sqlite_user_repository::SqliteUserRepository;
