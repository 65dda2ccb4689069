//! Core domain entities representing the business data model.
//!
//! Plain data structures without business logic. Entities follow the
//! "New Type" pattern with separate structs for creation:
//! `NewUser`, `NewLink`, `NewClick`.
//!
//! # Entity Types
//!
//! - [`User`] - A registered account with a hashed password
//! - [`Link`] - A shortened URL mapping with a visit counter
//! - [`Click`] - An append-only audit record of a resolution

pub mod click;
pub mod link;
pub mod user;

pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
pub use user::{NewUser, User};
