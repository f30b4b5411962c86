//! Error handling - maps typed failures onto `{ "message": ... }` JSON
//! responses with the matching HTTP status.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use journal_shared::ErrorResponse;
use std::fmt;

/// Application-level error type returned by handlers.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    Forbidden,
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Forbidden => write!(f, "Forbidden"),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::new(detail),
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::Forbidden => ErrorResponse::forbidden(),
            AppError::Conflict(detail) => ErrorResponse::new(detail),
            AppError::Internal(detail) => {
                // Log internal errors, return a generic message
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<journal_core::error::DomainError> for AppError {
    fn from(err: journal_core::error::DomainError) -> Self {
        match err {
            journal_core::error::DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {}", entity_type, id))
            }
            journal_core::error::DomainError::Validation(msg) => AppError::BadRequest(msg),
            journal_core::error::DomainError::Duplicate(msg) => AppError::Conflict(msg),
            journal_core::error::DomainError::NotOwner => AppError::Forbidden,
            journal_core::error::DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<journal_core::error::RepoError> for AppError {
    fn from(err: journal_core::error::RepoError) -> Self {
        match err {
            journal_core::error::RepoError::NotFound => {
                AppError::NotFound("Resource".to_string())
            }
            journal_core::error::RepoError::Constraint(msg) => AppError::Conflict(msg),
            journal_core::error::RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            journal_core::error::RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
