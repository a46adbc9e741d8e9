//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::LinkRepository`] trait
//! and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::LinkService`] - Short link registration (code allocation, TTL)
//! - [`services::RedirectService`] - Resolution with expiry check and visit counting
//! - [`services::StatsService`] - Read-only link metadata

pub mod services;
