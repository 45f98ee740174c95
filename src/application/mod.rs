//! Application layer services.
//!
//! Services coordinate domain collaborators and give HTTP handlers and the
//! admin CLI a small, typed API.
//!
//! # Available Services
//!
//! - [`services::resolution_service::ResolutionService`] - Short link creation and resolution
//! - [`services::visitor_service::VisitorService`] - Visitor details for the "about you" page

pub mod services;
