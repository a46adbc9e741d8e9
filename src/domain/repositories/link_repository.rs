//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink, VisitOutcome};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for the link table.
///
/// Links are insert-only; the only mutation is the visit counter, which is
/// updated through [`LinkRepository::record_visit`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with a zero visit count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already taken. The
    /// unique constraint on the code is the final arbiter, so this can happen
    /// even after [`LinkRepository::code_exists`] returned `false`.
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError>;

    /// Checks whether a short code is already in use.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn code_exists(&self, short_code: &str) -> Result<bool, AppError>;

    /// Resolves a code and counts the visit as one atomic operation.
    ///
    /// The counter is incremented only if the link exists and has not expired
    /// as of `now`. Concurrent calls never lose increments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn record_visit(
        &self,
        short_code: &str,
        now: DateTime<Utc>,
    ) -> Result<VisitOutcome, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the database cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
