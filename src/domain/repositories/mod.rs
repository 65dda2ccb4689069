//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and
//! are implemented by concrete repositories in
//! `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Credential storage
//! - [`LinkRepository`] - Short link lookups and mutations
//! - [`ClickRepository`] - Append-only click audit log
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod click_repository;
pub mod link_repository;
pub mod user_repository;

pub use click_repository::ClickRepository;
pub use link_repository::LinkRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
