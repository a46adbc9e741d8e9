//! Core domain entities.
//!
//! - [`Link`] - A stored short code mapping with its visit counter
//! - [`NewLink`] - Input for creating a link
//! - [`VisitOutcome`] - Result of an atomic resolve-and-count against the store

pub mod link;

pub use link::{Link, NewLink, VisitOutcome};
