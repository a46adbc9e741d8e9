//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

/// Template for the landing page.
///
/// Renders `templates/index.html`: a form that posts to `/api/shorten` from
/// `static/app.js` and shows the resulting short URL.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub site_domain: String,
    pub default_ttl: String,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        site_domain: state.site.site_domain.clone(),
        default_ttl: state.site.default_ttl.clone(),
    }
}
