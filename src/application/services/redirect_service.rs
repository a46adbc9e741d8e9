//! Short code resolution with visit counting.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::VisitOutcome;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Resolves short codes to their original URLs.
///
/// Expiration is evaluated at read time; expired links stay in the store and
/// remain visible to [`super::StatsService`].
pub struct RedirectService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> RedirectService<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Resolves `short_code` and counts the visit.
    ///
    /// The expiry check and the counter increment happen in a single store
    /// operation, so concurrent resolutions never lose increments and an
    /// expired link is never counted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes.
    /// Returns [`AppError::Expired`] if the link's `expires_at` has passed.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        let outcome = self
            .link_repository
            .record_visit(short_code, Utc::now())
            .await?;

        match outcome {
            VisitOutcome::Visited {
                original_url,
                visit_count,
            } => {
                metrics::counter!("redirects_total", "outcome" => "visited").increment(1);
                tracing::debug!(short_code, visit_count, "Short link resolved");
                Ok(original_url)
            }
            VisitOutcome::Expired { expires_at } => {
                metrics::counter!("redirects_total", "outcome" => "expired").increment(1);
                tracing::debug!(short_code, "Short link expired");
                Err(AppError::expired(
                    "Link has expired",
                    json!({ "short_code": short_code, "expires_at": expires_at }),
                ))
            }
            VisitOutcome::NotFound => {
                metrics::counter!("redirects_total", "outcome" => "not_found").increment(1);
                Err(AppError::not_found(
                    "Short code not found",
                    json!({ "short_code": short_code }),
                ))
            }
        }
    }
}
