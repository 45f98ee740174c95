//! HTTP handlers outside the page templates.

pub mod health;
pub mod redirect;

pub use health::health_handler;
pub use redirect::short_link_handler;
