//! Link registration service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::config::Config;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::domain::ttl::Ttl;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_custom_code};

/// Settings consumed by [`LinkService`].
#[derive(Debug, Clone)]
pub struct LinkServiceConfig {
    pub site_domain: String,
    pub default_ttl: Ttl,
    pub code_length: usize,
    pub max_attempts: usize,
}

impl Default for LinkServiceConfig {
    fn default() -> Self {
        Self {
            site_domain: "localhost:5000".to_string(),
            default_ttl: Ttl::default(),
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: 10,
        }
    }
}

impl From<&Config> for LinkServiceConfig {
    fn from(config: &Config) -> Self {
        Self {
            site_domain: config.site_domain.clone(),
            default_ttl: config.default_ttl,
            code_length: config.code_length,
            max_attempts: config.code_max_attempts,
        }
    }
}

/// A successfully registered short link.
#[derive(Debug, Clone)]
pub struct Registration {
    pub short_code: String,
    pub short_url: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Service for registering new short links.
///
/// Allocates a unique code (custom or generated), resolves the requested TTL
/// and persists the mapping. The store's unique constraint is the final word
/// on collisions; the existence check before insert only avoids wasted writes.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    config: LinkServiceConfig,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, config: LinkServiceConfig) -> Self {
        Self {
            link_repository,
            config,
        }
    }

    /// Registers a short link for `original_url`.
    ///
    /// # Arguments
    ///
    /// - `original_url` - The URL to shorten; stored as given apart from trimming
    /// - `custom_code` - Optional caller-chosen code, used verbatim; empty means "generate one"
    /// - `ttl_spec` - Optional `"<days>d"` or `"never"`; empty means the default TTL
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is missing, the custom code is
    /// malformed, or the TTL does not parse.
    ///
    /// Returns [`AppError::Conflict`] if the custom code is already taken.
    ///
    /// Returns [`AppError::Capacity`] if no free generated code was found within
    /// the configured number of attempts.
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn register(
        &self,
        original_url: String,
        custom_code: Option<String>,
        ttl_spec: Option<String>,
    ) -> Result<Registration, AppError> {
        let original_url = original_url.trim().to_string();
        if original_url.is_empty() {
            return Err(AppError::bad_request("URL is required", json!({})));
        }

        let ttl = match ttl_spec.as_deref().map(str::trim) {
            Some(spec) if !spec.is_empty() => spec.parse::<Ttl>()?,
            _ => self.config.default_ttl,
        };

        let now = Utc::now();
        let expires_at = ttl.expires_at(now);

        let custom_code = custom_code.filter(|c| !c.is_empty());

        let link = match custom_code {
            Some(code) => {
                self.insert_custom(code, original_url, now, expires_at)
                    .await?
            }
            None => {
                self.insert_generated(original_url, now, expires_at)
                    .await?
            }
        };

        metrics::counter!("links_created_total").increment(1);
        tracing::info!(
            short_code = %link.short_code,
            expires_at = ?link.expires_at,
            "Short link created"
        );

        Ok(Registration {
            short_url: self.get_short_url(&link.short_code),
            short_code: link.short_code,
            expires_at: link.expires_at,
        })
    }

    /// Constructs the full short URL for a code.
    ///
    /// Always uses HTTPS protocol.
    pub fn get_short_url(&self, short_code: &str) -> String {
        format!(
            "https://{}/{}",
            self.config.site_domain.trim_end_matches('/'),
            short_code
        )
    }

    async fn insert_custom(
        &self,
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        validate_custom_code(&code)?;

        let taken = || {
            AppError::conflict(
                "Custom code already exists",
                json!({ "short_code": code }),
            )
        };

        if self.link_repository.code_exists(&code).await? {
            return Err(taken());
        }

        let new_link = NewLink {
            short_code: code.clone(),
            original_url,
            created_at,
            expires_at,
        };

        match self.link_repository.insert(new_link).await {
            // Lost the race to a concurrent registration of the same code
            Err(AppError::Conflict { .. }) => Err(taken()),
            other => other,
        }
    }

    async fn insert_generated(
        &self,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        for attempt in 1..=self.config.max_attempts {
            let code = generate_code(self.config.code_length);

            if self.link_repository.code_exists(&code).await? {
                metrics::counter!("code_collisions_total").increment(1);
                tracing::warn!(attempt, "Generated code {} already taken", code);
                continue;
            }

            let new_link = NewLink {
                short_code: code,
                original_url: original_url.clone(),
                created_at,
                expires_at,
            };

            match self.link_repository.insert(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    metrics::counter!("code_collisions_total").increment(1);
                    tracing::warn!(attempt, "Generated code claimed concurrently, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::error!(
            attempts = self.config.max_attempts,
            "Failed to allocate a unique short code"
        );

        Err(AppError::capacity(
            "Failed to generate unique code",
            json!({ "attempts": self.config.max_attempts }),
        ))
    }
}
