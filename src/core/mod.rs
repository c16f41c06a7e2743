//! Core domain: the book record, its validation, and the persistence interface

pub mod book;
pub mod error;
pub mod extractors;
pub mod service;
pub mod validation;

pub use book::{Book, BookId, NewBook, ParseBookIdError};
pub use error::{ApiError, FieldValidationError, StorageError};
pub use extractors::BookIdPath;
pub use service::{BookService, DeleteOutcome, UpdateOutcome};
pub use validation::ValidatedBook;
