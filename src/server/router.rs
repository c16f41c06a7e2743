//! Dispatch table binding paths and methods to handlers
//!
//! Two groups are built independently and merged:
//! - data routes under `/api` plus the mutating routes the pages post to
//! - page routes that serve files from the views directory

use super::handlers::{
    AppState, create_book, delete_book, get_book, greeting, health_check, list_books,
    update_book,
};
use super::pages::{ADD_BOOK_PAGE, BOOK_PAGE, BOOKS_PAGE, EDIT_BOOK_PAGE, Pages};
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build data routes
///
/// - GET /api/books - List all books
/// - GET /api/book/{id} - Get one book
/// - GET /api/book/edit/{id} - Get one book for the edit form
/// - POST /api/book/edit/{id} - Replace all fields of a book
pub fn build_api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/books", get(list_books))
        .route("/api/book/{id}", get(get_book))
        .route("/api/book/edit/{id}", get(get_book).post(update_book))
}

/// Build page routes, including the create and delete actions that share
/// their paths
///
/// - GET /books - Listing page
/// - GET /book/add - Create form; POST creates a book
/// - GET /book/{id} - Detail page; DELETE removes the book
/// - GET /book/edit/{id} - Edit form
pub fn build_page_routes(pages: &Pages) -> Router<AppState> {
    Router::new()
        .route("/books", pages.page(BOOKS_PAGE))
        .route("/book/add", pages.page(ADD_BOOK_PAGE).post(create_book))
        .route("/book/{id}", pages.page(BOOK_PAGE).delete(delete_book))
        .route("/book/edit/{id}", pages.page(EDIT_BOOK_PAGE))
}

/// Build the complete application router
pub fn build_router(state: AppState, pages: &Pages) -> Router {
    Router::new()
        .route("/", get(greeting))
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .merge(build_api_routes())
        .merge(build_page_routes(pages))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
