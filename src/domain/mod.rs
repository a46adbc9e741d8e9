//! Domain layer containing business entities and logic.
//!
//! Defines the [`entities::Link`] model, the [`ttl::Ttl`] expiration grammar,
//! and the [`repositories::LinkRepository`] contract implemented by the
//! infrastructure layer.
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod ttl;
