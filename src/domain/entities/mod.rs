//! Core domain entities.
//!
//! - [`ShortLink`] - A validated short code and its destination
//! - [`Registration`] - Outcome of registering a short code

pub mod short_link;

pub use short_link::{Registration, ShortLink};
