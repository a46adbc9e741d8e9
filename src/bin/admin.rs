//! CLI administration tool for tinylink.
//!
//! Creates links, inspects statistics, and performs database operations
//! directly against the store, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts for it when omitted)
//! cargo run --bin admin -- shorten https://example.com/page --expires 7d
//!
//! # Global totals, or one link
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- stats Ab3xYz
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (see `tinylink::config`).

use tinylink::application::services::{LinkService, StatsService};
use tinylink::config::{self, Config};
use tinylink::infrastructure::persistence::{SqliteLinkRepository, pool};

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing tinylink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Shorten {
        /// URL to shorten (prompted if omitted)
        url: Option<String>,

        /// Custom short code
        #[arg(short, long)]
        custom: Option<String>,

        /// Expiration, e.g. "7d" or "never"
        #[arg(short, long)]
        expires: Option<String>,
    },

    /// Show global statistics, or one link's statistics
    Stats {
        /// Short code to inspect
        code: Option<String>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = pool::connect(&config).await?;

    let result = match cli.command {
        Commands::Shorten {
            url,
            custom,
            expires,
        } => shorten(&pool, &config, url, custom, expires).await,
        Commands::Stats { code: Some(code) } => link_stats(&pool, &code).await,
        Commands::Stats { code: None } => global_stats(&pool).await,
        Commands::Db { action } => handle_db_action(action, &pool).await,
    };

    pool.close().await;
    result
}

fn repository(pool: &SqlitePool) -> Arc<SqliteLinkRepository> {
    Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone())))
}

/// Registers a link through the same service the API uses.
async fn shorten(
    pool: &SqlitePool,
    config: &Config,
    url: Option<String>,
    custom: Option<String>,
    expires: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("URL").interact_text()?,
    };

    let service = LinkService::new(repository(pool), config.into());
    let registration = service.register(url, custom, expires).await?;

    let expires_at = registration
        .expires_at
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "never".to_string());

    println!("{}", "✅ Link created".green().bold());
    println!();
    println!("  Short URL: {}", registration.short_url.bright_yellow().bold());
    println!("  Code:      {}", registration.short_code.cyan());
    println!("  Expires:   {}", expires_at.bright_black());
    println!();

    Ok(())
}

/// Displays one link's metadata.
async fn link_stats(pool: &SqlitePool, code: &str) -> Result<()> {
    let service = StatsService::new(repository(pool));
    let link = service.get_stats(code).await?;

    println!("{} {}", "📊 Link".bright_blue().bold(), code.cyan().bold());
    println!();
    println!("  URL:     {}", link.original_url.bright_white());
    println!(
        "  Created: {}",
        link.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );

    let status = match link.expires_at {
        None => "never expires".green(),
        Some(t) if link.is_expired() => format!("expired {}", t.format("%Y-%m-%d %H:%M")).red(),
        Some(t) => format!("expires {}", t.format("%Y-%m-%d %H:%M")).green(),
    };
    println!("  Status:  {}", status);
    println!(
        "  Visits:  {}",
        link.visit_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Displays store-wide totals.
///
/// Shows:
/// - Total number of links
/// - Number of expired links (still stored)
/// - Sum of all visit counters
async fn global_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    let expired_count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM links WHERE expires_at IS NOT NULL AND expires_at < ?",
    )
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    let visits_total: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(visit_count), 0) FROM links")
        .fetch_one(pool)
        .await?;

    println!(
        "  Links:   {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Expired: {}",
        expired_count.to_string().bright_yellow().bold()
    );
    println!(
        "  Visits:  {}",
        visits_total.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;
            let journal_mode: String = sqlx::query_scalar("PRAGMA journal_mode")
                .fetch_one(pool)
                .await?;

            println!("  SQLite:       {}", version.bright_white());
            println!("  Journal mode: {}", journal_mode.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "📦 Applying migrations...".bright_blue());

            pool::migrate(pool).await?;

            println!("{}", "✅ Migrations up to date".green().bold());
        }
    }

    Ok(())
}
