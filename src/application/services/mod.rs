//! Business logic services for the application layer.

pub mod resolution_service;
pub mod visitor_service;

pub use resolution_service::ResolutionService;
pub use visitor_service::VisitorService;
