//! HTTP handlers for book operations
//!
//! Each handler performs exactly one `BookService` call. Failures propagate
//! as [`ApiError`], whose `IntoResponse` impl produces the status and body.

use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::core::{ApiError, Book, BookIdPath, BookService, ValidatedBook};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookService>,
    pub greeting: Arc<str>,
}

impl AppState {
    pub fn new(books: Arc<dyn BookService>, greeting: impl Into<Arc<str>>) -> Self {
        Self {
            books,
            greeting: greeting.into(),
        }
    }
}

/// `{"book": {...}}`
#[derive(Debug, Serialize)]
pub struct BookEnvelope {
    pub book: Book,
}

/// Confirmation body for create, update and delete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: None,
            message,
        }
    }

    pub fn success(message: &'static str) -> Self {
        Self {
            success: Some(true),
            message,
        }
    }
}

/// GET / - greeting text
pub async fn greeting(State(state): State<AppState>) -> String {
    state.greeting.to_string()
}

/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "bookshelf"
    }))
}

/// GET /api/books
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.books.find().await?;
    tracing::debug!(count = books.len(), "listed books");

    Ok(Json(books))
}

/// GET /api/book/{id} and GET /api/book/edit/{id}
pub async fn get_book(
    State(state): State<AppState>,
    BookIdPath(id): BookIdPath,
) -> Result<Json<BookEnvelope>, ApiError> {
    let book = state
        .books
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound { id })?;

    Ok(Json(BookEnvelope { book }))
}

/// POST /book/add
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedBook(book): ValidatedBook,
) -> Result<Json<MessageResponse>, ApiError> {
    let created = state.books.create(book).await?;
    tracing::info!(id = %created.id, title = %created.title, "book created");

    Ok(Json(MessageResponse::new("Successfully Added")))
}

/// POST /api/book/edit/{id}
///
/// Replacing an id that matches nothing still answers 200.
pub async fn update_book(
    State(state): State<AppState>,
    BookIdPath(id): BookIdPath,
    ValidatedBook(book): ValidatedBook,
) -> Result<Json<MessageResponse>, ApiError> {
    let outcome = state.books.update_one(&id, book).await?;
    if outcome.matched == 0 {
        tracing::debug!(id = %id, "update matched no book");
    } else {
        tracing::info!(id = %id, modified = outcome.modified, "book updated");
    }

    Ok(Json(MessageResponse::new("Successfully Updated")))
}

/// DELETE /book/{id}
pub async fn delete_book(
    State(state): State<AppState>,
    BookIdPath(id): BookIdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    let outcome = state.books.delete_one(&id).await?;
    if outcome.deleted == 0 {
        return Err(ApiError::NotFound { id });
    }
    tracing::info!(id = %id, "book deleted");

    Ok(Json(MessageResponse::success("Successfully Deleted")))
}
