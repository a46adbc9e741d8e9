//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its metadata.
///
/// Every field except `visit_count` is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub visit_count: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
        visit_count: i64,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            created_at,
            expires_at,
            visit_count,
        }
    }

    /// Returns true if `expires_at` is strictly before `now`.
    ///
    /// Links without an expiry never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for creating a new link. `visit_count` always starts at 0.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Outcome of resolving a code and counting the visit in one step.
#[derive(Debug, Clone, PartialEq)]
pub enum VisitOutcome {
    /// The link was live; its counter now reads `visit_count`.
    Visited {
        original_url: String,
        visit_count: i64,
    },
    /// The link exists but expired. The counter was not touched.
    Expired { expires_at: Option<DateTime<Utc>> },
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn link_expiring(expires_at: Option<DateTime<Utc>>) -> Link {
        Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
            expires_at,
            0,
        )
    }

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            7,
            "Ab3xYz".to_string(),
            "https://example.com".to_string(),
            now,
            None,
            0,
        );

        assert_eq!(link.id, 7);
        assert_eq!(link.short_code, "Ab3xYz");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.created_at, now);
        assert_eq!(link.visit_count, 0);
        assert!(!link.is_expired());
    }

    #[test]
    fn test_link_is_expired() {
        let link = link_expiring(Some(Utc::now() - Duration::seconds(1)));
        assert!(link.is_expired());
    }

    #[test]
    fn test_link_not_expired_before_deadline() {
        let link = link_expiring(Some(Utc::now() + Duration::days(7)));
        assert!(!link.is_expired());
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let deadline = Utc::now();
        let link = link_expiring(Some(deadline));

        assert!(!link.is_expired_at(deadline));
        assert!(link.is_expired_at(deadline + Duration::milliseconds(1)));
    }

    #[test]
    fn test_never_expiring_link() {
        let link = link_expiring(None);
        let far_future = Utc::now() + Duration::days(365 * 500);

        assert!(!link.is_expired_at(far_future));
    }
}
