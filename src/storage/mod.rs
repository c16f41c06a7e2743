//! Storage implementations for different backends

pub mod in_memory;
pub mod mongodb;

pub use in_memory::InMemoryBookService;
pub use self::mongodb::{BOOKS_COLLECTION, MongoBookService};
