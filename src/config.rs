//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and passed explicitly to
//! the components that need it. Nothing reads the environment after that.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite URL (default: `sqlite://shortener.db`)
//! - `SITE_DOMAIN` - Host used in returned short URLs (default: `localhost:5000`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `DEFAULT_TTL` - Lifetime of links created without `expires` (default: `30d`)
//! - `CODE_LENGTH` - Length of generated codes (default: 6, range 4-32)
//! - `CODE_MAX_ATTEMPTS` - Generation attempts before giving up (default: 10)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`, `DB_BUSY_TIMEOUT`,
//!   `DB_CONNECT_RETRIES` - Pool tuning

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::domain::ttl::Ttl;
use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Host (and optional port) placed in `https://{site_domain}/{code}`.
    pub site_domain: String,
    pub listen_addr: String,
    pub default_ttl: Ttl,
    pub code_length: usize,
    pub code_max_attempts: usize,
    pub static_dir: String,
    pub log_level: String,
    pub log_format: String,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 10).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
    /// How long a writer waits on a locked database in seconds
    /// (`DB_BUSY_TIMEOUT`, default: 5).
    pub db_busy_timeout: u64,
    /// Connection attempts at startup (`DB_CONNECT_RETRIES`, default: 5).
    pub db_connect_retries: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://shortener.db".to_string(),
            site_domain: "localhost:5000".to_string(),
            listen_addr: "0.0.0.0:5000".to_string(),
            default_ttl: Ttl::default(),
            code_length: DEFAULT_CODE_LENGTH,
            code_max_attempts: 10,
            static_dir: "static".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 10,
            db_connect_timeout: 30,
            db_busy_timeout: 5,
            db_connect_retries: 5,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `DEFAULT_TTL` is set but malformed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let default_ttl = match env::var("DEFAULT_TTL") {
            Ok(spec) => spec
                .parse::<Ttl>()
                .with_context(|| format!("Invalid DEFAULT_TTL '{spec}'"))?,
            Err(_) => defaults.default_ttl,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            site_domain: env::var("SITE_DOMAIN").unwrap_or(defaults.site_domain),
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            default_ttl,
            code_length: parse_var("CODE_LENGTH").unwrap_or(defaults.code_length),
            code_max_attempts: parse_var("CODE_MAX_ATTEMPTS")
                .unwrap_or(defaults.code_max_attempts),
            static_dir: env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS")
                .unwrap_or(defaults.db_max_connections),
            db_connect_timeout: parse_var("DB_CONNECT_TIMEOUT")
                .unwrap_or(defaults.db_connect_timeout),
            db_busy_timeout: parse_var("DB_BUSY_TIMEOUT").unwrap_or(defaults.db_busy_timeout),
            db_connect_retries: parse_var("DB_CONNECT_RETRIES")
                .unwrap_or(defaults.db_connect_retries),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        let domain = self.site_domain.trim();
        if domain.is_empty() || domain.contains("://") || domain.contains('/') {
            anyhow::bail!(
                "SITE_DOMAIN must be a bare host[:port], got '{}'",
                self.site_domain
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(4..=32).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between 4 and 32, got {}",
                self.code_length
            );
        }

        if self.code_max_attempts == 0 || self.code_max_attempts > 1000 {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 1000, got {}",
                self.code_max_attempts
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }
        if self.db_connect_retries == 0 {
            anyhow::bail!("DB_CONNECT_RETRIES must be at least 1");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Site domain: {}", self.site_domain);
        tracing::info!("  Default TTL: {}", self.default_ttl);
        tracing::info!(
            "  Code length: {} ({} attempts)",
            self.code_length,
            self.code_max_attempts
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
