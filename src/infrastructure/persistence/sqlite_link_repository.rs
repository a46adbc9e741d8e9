//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink, VisitOutcome};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    short_code: String,
    original_url: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    visit_count: i64,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.short_code,
            row.original_url,
            row.created_at,
            row.expires_at,
            row.visit_count,
        )
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Timestamps are stored as RFC 3339 UTC text, which orders lexicographically
/// in time order, so expiry is compared inside SQL.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (short_code, original_url, created_at, expires_at, visit_count)
            VALUES (?1, ?2, ?3, ?4, 0)
            RETURNING id, short_code, original_url, created_at, expires_at, visit_count
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.original_url)
        .bind(new_link.created_at)
        .bind(new_link.expires_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, short_code, original_url, created_at, expires_at, visit_count
            FROM links
            WHERE short_code = ?1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn code_exists(&self, short_code: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM links WHERE short_code = ?1)")
                .bind(short_code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn record_visit(
        &self,
        short_code: &str,
        now: DateTime<Utc>,
    ) -> Result<VisitOutcome, AppError> {
        let visited: Option<(String, i64)> = sqlx::query_as(
            r#"
            UPDATE links
            SET visit_count = visit_count + 1
            WHERE short_code = ?1
              AND (expires_at IS NULL OR expires_at >= ?2)
            RETURNING original_url, visit_count
            "#,
        )
        .bind(short_code)
        .bind(now)
        .fetch_optional(self.pool.as_ref())
        .await?;

        if let Some((original_url, visit_count)) = visited {
            return Ok(VisitOutcome::Visited {
                original_url,
                visit_count,
            });
        }

        // Nothing was updated: either the code is unknown or the row failed the
        // expiry predicate. Rows are never deleted, so a hit here means expired.
        let expires_at: Option<Option<DateTime<Utc>>> =
            sqlx::query_scalar("SELECT expires_at FROM links WHERE short_code = ?1")
                .bind(short_code)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(match expires_at {
            Some(expires_at) => VisitOutcome::Expired { expires_at },
            None => VisitOutcome::NotFound,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
