//! SQLite connection pool setup and schema migrations.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::config::Config;

/// Embedded migrations from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Builds connect options from the configured URL.
///
/// The database file is created if missing. WAL lets readers proceed while a
/// visit counter is being written, `NORMAL` sync keeps each commit short under
/// WAL, and the busy timeout makes concurrent writers queue instead of failing.
pub fn connect_options(config: &Config) -> Result<SqliteConnectOptions> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("Invalid DATABASE_URL '{}'", config.database_url))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(config.db_busy_timeout));

    Ok(options)
}

/// Connects to the database, retrying with exponential backoff.
///
/// Makes `config.db_connect_retries` attempts in total.
///
/// # Errors
///
/// Returns the last connection error once all attempts fail.
pub async fn connect(config: &Config) -> Result<SqlitePool> {
    let options = connect_options(config)?;
    let pool_options = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout));

    let retry_strategy = ExponentialBackoff::from_millis(2)
        .factor(50)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(config.db_connect_retries.saturating_sub(1));

    let pool = Retry::start(retry_strategy, || {
        let options = options.clone();
        let pool_options = pool_options.clone();
        async move {
            pool_options.connect_with(options).await.inspect_err(|e| {
                tracing::warn!("Database connection attempt failed: {}", e);
            })
        }
    })
    .await
    .context("Failed to connect to database")?;

    Ok(pool)
}

/// Applies pending migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    MIGRATOR
        .run(pool)
        .await
        .context("Failed to apply migrations")?;
    Ok(())
}
