//! Infrastructure layer for external integrations.
//!
//! Implements the traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`geo`] - Geo-IP lookups (HTTP and no-op implementations)
//! - [`persistence`] - Link store implementations (PostgreSQL and in-memory)

pub mod geo;
pub mod persistence;
