//! Shared test harness for storage backend testing
//!
//! Provides book fixtures, a `BookService` double that always fails, and the
//! macros that generate contract and HTTP suites for a backend.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod book_service_tests;
#[macro_use]
pub mod integration;

use async_trait::async_trait;
use bookshelf::core::{
    Book, BookId, BookService, DeleteOutcome, NewBook, StorageError, UpdateOutcome,
};
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Build a field set with the given values
pub fn sample_book(title: &str, author: &str, pages: i64, rating: f64, genres: &[&str]) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: author.to_string(),
        pages,
        rating,
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

/// The canonical round-trip record
pub fn dune() -> NewBook {
    sample_book("Dune", "Herbert", 412, 5.0, &["scifi"])
}

/// The repository's own page files
pub fn views_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("views")
}

// ---------------------------------------------------------------------------
// FailingBookService: every call fails like an unreachable database
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default)]
pub struct FailingBookService;

fn unreachable_backend() -> StorageError {
    StorageError::Connection {
        backend: "MongoDB",
        message: "server selection timeout".to_string(),
    }
}

#[async_trait]
impl BookService for FailingBookService {
    async fn create(&self, _book: NewBook) -> Result<Book, StorageError> {
        Err(unreachable_backend())
    }

    async fn find(&self) -> Result<Vec<Book>, StorageError> {
        Err(unreachable_backend())
    }

    async fn find_by_id(&self, _id: &BookId) -> Result<Option<Book>, StorageError> {
        Err(unreachable_backend())
    }

    async fn update_one(&self, _id: &BookId, _book: NewBook) -> Result<UpdateOutcome, StorageError> {
        Err(unreachable_backend())
    }

    async fn delete_one(&self, _id: &BookId) -> Result<DeleteOutcome, StorageError> {
        Err(unreachable_backend())
    }
}
