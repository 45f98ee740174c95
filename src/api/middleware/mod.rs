//! HTTP middleware for request observability.

pub mod access_log;
pub mod tracing;
