//! Domain layer containing the short-link model and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::ShortLink`], [`entities::Registration`])
//! - [`repositories`] - Storage trait definitions implemented by the infrastructure layer
//! - [`visitor`] - Visitor description shown on the "about you" page
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.

pub mod entities;
pub mod repositories;
pub mod visitor;
