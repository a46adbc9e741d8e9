//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// A missing or `null` `url` is reported as a validation error rather than a
/// JSON rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(
        required(message = "URL is required"),
        length(min = 1, message = "URL is required")
    )]
    pub url: Option<String>,

    /// Optional custom short code.
    pub custom: Option<String>,

    /// Optional lifetime: `"<days>d"` or `"never"`.
    pub expires: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub short_code: String,
    pub expires_at: Option<DateTime<Utc>>,
}
