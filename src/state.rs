//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService, StatsService};
use crate::config::Config;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Services and settings shared across requests.
///
/// Cloning is cheap; every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub redirect_service: Arc<RedirectService<SqliteLinkRepository>>,
    pub stats_service: Arc<StatsService<SqliteLinkRepository>>,
    pub link_repository: Arc<SqliteLinkRepository>,
    pub site: Arc<SiteInfo>,
}

/// Values rendered on the index page.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    pub site_domain: String,
    pub default_ttl: String,
}

impl AppState {
    /// Wires all services on top of one repository.
    pub fn new(link_repository: Arc<SqliteLinkRepository>, config: &Config) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(
                link_repository.clone(),
                config.into(),
            )),
            redirect_service: Arc::new(RedirectService::new(link_repository.clone())),
            stats_service: Arc::new(StatsService::new(link_repository.clone())),
            link_repository,
            site: Arc::new(SiteInfo {
                site_domain: config.site_domain.clone(),
                default_ttl: config.default_ttl.to_string(),
            }),
        }
    }
}
