//!
//! # Custom Error Handling
//!
//! Defines the `AppError` type used throughout the application and its mapping
//! to HTTP responses. Every error surfaces to the client as a JSON body of the
//! form `{"error": message}` with the appropriate status code.
//!
//! `From` implementations for `sqlx::Error`, `validator::ValidationErrors`,
//! `jsonwebtoken::errors::Error`, and `bcrypt::BcryptError` allow handlers to
//! use the `?` operator directly.

use actix_web::{error::ResponseError, web, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or invalid request (HTTP 400).
    BadRequest(String),
    /// Failed input validation, e.g. an empty title (HTTP 400).
    ValidationError(String),
    /// Authentication required but missing or credentials rejected (HTTP 401).
    Unauthorized(String),
    /// A token was presented but is invalid or expired (HTTP 403).
    Forbidden(String),
    /// Requested resource does not exist for this caller (HTTP 404).
    NotFound(String),
    /// A uniqueness constraint was violated, e.g. duplicate username (HTTP 409).
    Conflict(String),
    /// Unexpected server-side error (HTTP 500).
    InternalServerError(String),
    /// Error originating from the persistence layer (HTTP 500).
    DatabaseError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::ValidationError(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::Unauthorized(msg) => HttpResponse::Unauthorized().json(json!({
                "error": msg
            })),
            AppError::Forbidden(msg) => HttpResponse::Forbidden().json(json!({
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            AppError::Conflict(msg) => HttpResponse::Conflict().json(json!({
                "error": msg
            })),
            AppError::InternalServerError(msg) => HttpResponse::InternalServerError().json(json!({
                "error": msg
            })),
            // Persistence failures are surfaced as 500 with the underlying message.
            AppError::DatabaseError(msg) => HttpResponse::InternalServerError().json(json!({
                "error": msg
            })),
        }
    }
}

/// Converts `sqlx::Error` into `AppError`.
///
/// `sqlx::Error::RowNotFound` maps to `AppError::NotFound`; everything else
/// becomes `AppError::DatabaseError`.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::ValidationError(error.to_string())
    }
}

/// JWT processing failures reject the request outright.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(error: jsonwebtoken::errors::Error) -> AppError {
        AppError::Forbidden(error.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::InternalServerError(error.to_string())
    }
}

/// JSON extractor configuration that reports deserialization failures
/// (malformed bodies, missing required fields) as `{"error": message}`
/// with status 400 instead of actix's default plaintext response.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_responses() {
        let error = AppError::BadRequest("Title is required".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::ValidationError("title: too short".into());
        assert_eq!(error.error_response().status(), 400);

        let error = AppError::Unauthorized("Missing token".into());
        assert_eq!(error.error_response().status(), 401);

        let error = AppError::Forbidden("Invalid token".into());
        assert_eq!(error.error_response().status(), 403);

        let error = AppError::NotFound("Todo not found".into());
        assert_eq!(error.error_response().status(), 404);

        let error = AppError::Conflict("Username already exists".into());
        assert_eq!(error.error_response().status(), 409);

        let error = AppError::InternalServerError("Server error".into());
        assert_eq!(error.error_response().status(), 500);

        let error = AppError::DatabaseError("connection lost".into());
        assert_eq!(error.error_response().status(), 500);
    }

    #[test]
    fn test_sqlx_row_not_found_maps_to_404() {
        let error: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(error.error_response().status(), 404);
    }
}
