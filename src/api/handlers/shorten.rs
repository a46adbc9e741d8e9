//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "custom": "promo",   // optional
///   "expires": "7d"      // optional, "<days>d" or "never", default "30d"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "https://s.example.com/promo",
///   "short_code": "promo",
///   "expires_at": "2025-01-08T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the body is not valid JSON of the expected shape
/// - 400 if `url` is missing, or `custom`/`expires` are malformed
/// - 409 if the custom code is taken
/// - 503 if no free code could be generated
/// - 500 on storage errors
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    payload.validate()?;

    let registration = state
        .link_service
        .register(
            payload.url.unwrap_or_default(),
            payload.custom,
            payload.expires,
        )
        .await?;

    Ok(Json(ShortenResponse {
        short_url: registration.short_url,
        short_code: registration.short_code,
        expires_at: registration.expires_at,
    }))
}
