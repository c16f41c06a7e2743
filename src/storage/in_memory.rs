//! In-memory implementation of BookService for testing and development

use crate::core::{
    Book, BookId, BookService, DeleteOutcome, NewBook, StorageError, UpdateOutcome,
};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// In-memory book service implementation
///
/// Books are kept in insertion order, which is the natural order `find`
/// returns. Uses RwLock for thread-safe access; clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryBookService {
    books: Arc<RwLock<IndexMap<BookId, Book>>>,
}

impl InMemoryBookService {
    /// Create a new, empty in-memory book service
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored books
    pub fn len(&self) -> Result<usize, StorageError> {
        let books = self.books.read().map_err(poisoned)?;

        Ok(books.len())
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}

fn poisoned<T>(e: std::sync::PoisonError<T>) -> StorageError {
    StorageError::Lock(e.to_string())
}

#[async_trait]
impl BookService for InMemoryBookService {
    async fn create(&self, book: NewBook) -> Result<Book, StorageError> {
        let mut books = self.books.write().map_err(poisoned)?;

        let id = BookId::new();
        let book = Book::from_parts(id, book);
        books.insert(id, book.clone());

        Ok(book)
    }

    async fn find(&self) -> Result<Vec<Book>, StorageError> {
        let books = self.books.read().map_err(poisoned)?;

        Ok(books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, StorageError> {
        let books = self.books.read().map_err(poisoned)?;

        Ok(books.get(id).cloned())
    }

    async fn update_one(&self, id: &BookId, book: NewBook) -> Result<UpdateOutcome, StorageError> {
        let mut books = self.books.write().map_err(poisoned)?;

        let Some(existing) = books.get_mut(id) else {
            return Ok(UpdateOutcome::default());
        };

        let replacement = Book::from_parts(*id, book);
        let modified = u64::from(*existing != replacement);
        *existing = replacement;

        Ok(UpdateOutcome {
            matched: 1,
            modified,
        })
    }

    async fn delete_one(&self, id: &BookId) -> Result<DeleteOutcome, StorageError> {
        let mut books = self.books.write().map_err(poisoned)?;

        let deleted = u64::from(books.shift_remove(id).is_some());

        Ok(DeleteOutcome { deleted })
    }
}
