//! Link lifetime specification.
//!
//! The grammar accepted from callers and configuration is either
//! `"<N>d"` (N days from creation, 1..=36500) or the literal `"never"`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use serde_json::json;

use crate::error::AppError;

/// Upper bound on day counts, roughly a century.
pub const MAX_TTL_DAYS: u32 = 36_500;

static DAYS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)d$").expect("valid TTL regex"));

/// How long a link stays resolvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    Days(u32),
    Never,
}

impl Ttl {
    /// Resolves the TTL to an absolute expiry relative to `now`.
    pub fn expires_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Ttl::Days(days) => Some(now + Duration::days(i64::from(*days))),
            Ttl::Never => None,
        }
    }
}

impl Default for Ttl {
    fn default() -> Self {
        Ttl::Days(30)
    }
}

impl FromStr for Ttl {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();

        if spec == "never" {
            return Ok(Ttl::Never);
        }

        let invalid = || {
            AppError::bad_request(
                "Invalid expiration, expected \"<days>d\" or \"never\"",
                json!({ "expires": s }),
            )
        };

        let caps = DAYS_REGEX.captures(spec).ok_or_else(invalid)?;
        let days: u32 = caps[1].parse().map_err(|_| invalid())?;

        if days == 0 || days > MAX_TTL_DAYS {
            return Err(AppError::bad_request(
                format!("Expiration must be between 1 and {MAX_TTL_DAYS} days"),
                json!({ "expires": s }),
            ));
        }

        Ok(Ttl::Days(days))
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ttl::Days(days) => write!(f, "{days}d"),
            Ttl::Never => f.write_str("never"),
        }
    }
}
