//! SQLite persistence.
//!
//! - [`SqliteLinkRepository`] - Link storage, lookup, and atomic visit counting
//! - [`pool`] - Connection pool setup with startup retries and embedded migrations

pub mod pool;
pub mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
