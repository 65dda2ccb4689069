//! HTTP request handlers for the web surface.

mod home;
mod links;
mod login;
mod redirect;
mod signup;

pub use home::home_handler;
pub use links::{create_link_handler, list_links_handler};
pub use login::{login_handler, login_page_handler};
pub use redirect::{fallback_handler, redirect_handler};
pub use signup::{signup_handler, signup_page_handler};
