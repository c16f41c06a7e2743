//! Typed error handling for the book service
//!
//! Two layers:
//!
//! - [`StorageError`]: failures reported by a [`BookService`](crate::core::BookService)
//!   backend. These never reach clients verbatim.
//! - [`ApiError`]: everything a handler can fail with, each variant carrying its
//!   HTTP status and response body.
//!
//! # Example
//!
//! ```rust,ignore
//! async fn get_book(id: BookId) -> Result<Book, ApiError> {
//!     service
//!         .find_by_id(&id)
//!         .await?
//!         .ok_or(ApiError::NotFound { id })
//! }
//! ```

use crate::core::book::BookId;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by persistence backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be reached
    #[error("failed to connect to {backend}: {message}")]
    Connection {
        backend: &'static str,
        message: String,
    },

    /// A query or command was rejected or failed in flight
    #[error("{backend} {operation} failed: {message}")]
    Query {
        backend: &'static str,
        operation: &'static str,
        message: String,
    },

    /// A stored record could not be decoded into a book
    #[error("stored book {id} could not be decoded: {message}")]
    Corrupt { id: String, message: String },

    /// In-process lock was poisoned by a panicking writer
    #[error("storage lock poisoned: {0}")]
    Lock(String),
}

// =============================================================================
// API Errors
// =============================================================================

/// A single failed field rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors surfaced by HTTP handlers and extractors
#[derive(Debug)]
pub enum ApiError {
    /// One or more body fields failed validation
    Validation(Vec<FieldValidationError>),

    /// The body could not be decoded at all
    InvalidBody { message: String },

    /// The path identifier is not a well-formed book id
    InvalidId { value: String },

    /// No book matches the identifier
    NotFound { id: BookId },

    /// The persistence layer failed
    Storage(StorageError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ApiError::InvalidBody { message } => write!(f, "Invalid request body: {}", message),
            ApiError::InvalidId { value } => write!(f, "Invalid book ID: '{}'", value),
            ApiError::NotFound { id } => write!(f, "Book '{}' not found", id),
            ApiError::Storage(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::InvalidBody { .. } => "INVALID_BODY",
            ApiError::InvalidId { .. } => "INVALID_ID",
            ApiError::NotFound { .. } => "BOOK_NOT_FOUND",
            ApiError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// JSON body sent to the client
    ///
    /// Storage failures only ever expose a generic message.
    pub fn body(&self) -> serde_json::Value {
        match self {
            ApiError::Validation(errors) => json!({ "errors": errors }),
            ApiError::InvalidBody { message } => json!({
                "error": "Invalid request body",
                "details": message
            }),
            ApiError::InvalidId { .. } => json!({ "error": "Invalid book ID" }),
            ApiError::NotFound { .. } => json!({ "error": "Book not found" }),
            ApiError::Storage(_) => json!({ "error": "Internal Server Error" }),
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Storage(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Storage(e) => {
                tracing::error!(code = self.error_code(), error = %e, "persistence failure");
            }
            _ => tracing::debug!(code = self.error_code(), "request rejected: {}", self),
        }

        (self.status_code(), Json(self.body())).into_response()
    }
}
