//! Persistence interface for books

use crate::core::book::{Book, BookId, NewBook};
use crate::core::error::StorageError;
use async_trait::async_trait;

/// Result of a replace-by-id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Records whose id matched
    pub matched: u64,
    /// Records actually changed
    pub modified: u64,
}

/// Result of a delete-by-id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted: u64,
}

/// Storage backend for book records
///
/// Each method is a single round-trip to the backend. Implementations own
/// identifier generation and never keep request-scoped state.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Persist a new book and return it with its assigned id
    async fn create(&self, book: NewBook) -> Result<Book, StorageError>;

    /// All books, in the backend's natural order
    async fn find(&self) -> Result<Vec<Book>, StorageError>;

    /// Look up one book
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, StorageError>;

    /// Replace every field of the book with the given id
    ///
    /// Matching nothing is not an error; callers inspect the outcome.
    async fn update_one(&self, id: &BookId, book: NewBook) -> Result<UpdateOutcome, StorageError>;

    /// Remove the book with the given id
    async fn delete_one(&self, id: &BookId) -> Result<DeleteOutcome, StorageError>;

    /// Release backend resources at shutdown
    async fn close(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
