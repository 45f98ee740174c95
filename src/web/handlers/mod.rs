//! HTML template rendering handlers.

mod about_you;
mod auth;
mod fallback;
mod pages;
mod projects;

pub use about_you::about_you_handler;
pub use auth::{login_handler, logout_handler, signup_handler};
pub use fallback::fallback_handler;
pub use pages::{about_me_handler, index_handler, unfinished_handler};
pub use projects::projects_handler;
