//! Standardized API response envelopes.
//!
//! Errors are a flat `{ "message": "..." }` object; the HTTP status code
//! carries the error class (400/401/403/404/409/500).

use serde::{Deserialize, Serialize};

/// JSON error body returned alongside a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn unauthorized() -> Self {
        Self::new("Invalid credentials")
    }

    pub fn forbidden() -> Self {
        Self::new("Not the author of this post")
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::new(format!("{} not found", what.into()))
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}

/// JSON body for mutations that return no entity (signup, delete).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
