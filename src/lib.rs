//! # Bookshelf
//!
//! A small CRUD web service for book records backed by MongoDB.
//!
//! ## Features
//!
//! - **Typed records**: [`Book`](core::Book) and the replacement field set
//!   [`NewBook`](core::NewBook), identified by an ObjectId-backed [`BookId`](core::BookId)
//! - **Validation before handlers**: create/update bodies (JSON or HTML forms)
//!   are filtered and checked, reporting every failing field at once
//! - **Pluggable storage**: handlers talk to the [`BookService`](core::BookService)
//!   trait; MongoDB and in-memory backends are provided
//! - **Static pages**: browsing and editing pages served from a views directory
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bookshelf::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let books = MongoBookService::connect("mongodb://localhost:27017", "bookshelf").await?;
//!
//!     ServerBuilder::new()
//!         .with_book_service(books)
//!         .with_views_dir("views")
//!         .serve("0.0.0.0:8000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, Book, BookId, BookIdPath, BookService, DeleteOutcome, FieldValidationError,
        NewBook, StorageError, UpdateOutcome, ValidatedBook,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryBookService, MongoBookService};

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppState, Pages, ServerBuilder, build_router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
