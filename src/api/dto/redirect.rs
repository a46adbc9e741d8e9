//! DTO for redirect responses.

use serde::Serialize;

/// JSON body sent alongside the `Location` header.
#[derive(Debug, Serialize)]
pub struct RedirectResponse {
    pub redirect: String,
}
