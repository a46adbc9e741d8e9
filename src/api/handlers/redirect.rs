//! Handler for short URL redirect.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::redirect::RedirectResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// Each successful call counts one visit. The response is a `302 Found` with a
/// `Location` header, and carries `{"redirect": "<original_url>"}` as its body
/// for clients that do not follow redirects.
///
/// # Errors
///
/// - 404 if the short code doesn't exist
/// - 410 if the link has expired
/// - 500 on storage errors
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.redirect_service.resolve(&short_code).await?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, original_url.clone())],
        Json(RedirectResponse {
            redirect: original_url,
        }),
    ))
}
