//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns stored metadata for a short link.
///
/// # Endpoint
///
/// `GET /api/stats/{short_code}`
///
/// Expired links are still reported. Reading stats does not count as a visit.
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "created_at": "2025-01-01T12:00:00Z",
///   "expires_at": null,
///   "visit_count": 3
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.stats_service.get_stats(&short_code).await?;

    Ok(Json(link.into()))
}
