//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into service calls and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration
//!
//! # Status Codes
//!
//! | Error | Status |
//! |---|---|
//! | validation | 400 |
//! | not found | 404 |
//! | conflict | 409 |
//! | expired | 410 |
//! | storage | 500 |
//! | capacity | 503 |

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
