//! Domain layer containing business entities and data-access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`title_fetcher`] - Contract for the external title-resolution collaborator
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; business logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
pub mod title_fetcher;

pub use title_fetcher::TitleFetcher;

#[cfg(test)]
pub use title_fetcher::MockTitleFetcher;
