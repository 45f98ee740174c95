//! Non-page HTTP surface: short link redirects, health checks, and
//! request-level middleware.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - Redirect and health handlers
//! - [`middleware`] - Request tracing and access logging

pub mod dto;
pub mod handlers;
pub mod middleware;
