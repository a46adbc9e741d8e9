//! # tinylink
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate keeps a layered layout:
//!
//! - **Domain Layer** ([`domain`]) - Link entity, TTL parsing, and the repository trait
//! - **Application Layer** ([`application`]) - Registration, resolution, and statistics services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations, and the repository
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Landing page with the shorten form
//!
//! ## Features
//!
//! - Random or custom short codes, unique across the store
//! - Per-link expiration (`"7d"`, `"never"`) evaluated at read time
//! - Atomic visit counting that never loses increments under concurrency
//! - Health check and admin CLI (`src/bin/admin.rs`)
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://shortener.db"
//! export SITE_DOMAIN="sho.rt"
//!
//! # Migrations run on startup
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, RedirectService, StatsService};
    pub use crate::domain::entities::{Link, NewLink, VisitOutcome};
    pub use crate::domain::ttl::Ttl;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
