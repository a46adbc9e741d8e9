//! Browser-facing pages.
//!
//! Server-side rendered with Askama; the page talks to the JSON API from
//! `static/app.js`.

pub mod handlers;
pub mod routes;
