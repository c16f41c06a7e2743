//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Books live in a single `books` collection. Each document is
//! `{ _id: ObjectId, title, author, pages: Int64, rating: Double, genres: [String] }`.
//!
//! # Serialization strategy
//!
//! Documents are built and read field by field rather than through serde so
//! that records written by older clients (numbers stored as Int32 or Double,
//! genres stored as a single string) still decode.

use crate::core::{
    Book, BookId, BookService, DeleteOutcome, NewBook, StorageError, UpdateOutcome,
};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

/// Name of the collection holding book documents
pub const BOOKS_COLLECTION: &str = "books";

const BACKEND: &str = "MongoDB";

fn query_error(operation: &'static str) -> impl FnOnce(mongodb::error::Error) -> StorageError {
    move |e| StorageError::Query {
        backend: BACKEND,
        operation,
        message: e.to_string(),
    }
}

fn connection_error(e: mongodb::error::Error) -> StorageError {
    StorageError::Connection {
        backend: BACKEND,
        message: e.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Build the stored document for a field set, without `_id`
fn book_to_document(book: &NewBook) -> Document {
    doc! {
        "title": book.title.as_str(),
        "author": book.author.as_str(),
        "pages": book.pages,
        "rating": book.rating,
        "genres": book.genres.clone(),
    }
}

/// Decode a stored document into a book
fn document_to_book(doc: &Document) -> Result<Book, StorageError> {
    let id = doc.get_object_id("_id").map_err(|e| StorageError::Corrupt {
        id: "<unknown>".to_string(),
        message: e.to_string(),
    })?;
    let corrupt = |message: String| StorageError::Corrupt {
        id: id.to_hex(),
        message,
    };

    let text = |field: &str| -> Result<String, StorageError> {
        doc.get_str(field)
            .map(str::to_string)
            .map_err(|e| corrupt(format!("{}: {}", field, e)))
    };

    let pages = match doc.get("pages") {
        Some(Bson::Int32(n)) => i64::from(*n),
        Some(Bson::Int64(n)) => *n,
        Some(Bson::Double(f)) => *f as i64,
        other => return Err(corrupt(format!("pages: unexpected value {:?}", other))),
    };

    let rating = match doc.get("rating") {
        Some(Bson::Int32(n)) => f64::from(*n),
        Some(Bson::Int64(n)) => *n as f64,
        Some(Bson::Double(f)) => *f,
        other => return Err(corrupt(format!("rating: unexpected value {:?}", other))),
    };

    let genres = match doc.get("genres") {
        Some(Bson::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| corrupt("genres: non-string label".to_string()))?,
        Some(Bson::String(label)) => vec![label.clone()],
        other => return Err(corrupt(format!("genres: unexpected value {:?}", other))),
    };

    Ok(Book {
        id: BookId::from(id),
        title: text("title")?,
        author: text("author")?,
        pages,
        rating,
        genres,
    })
}

// ---------------------------------------------------------------------------
// MongoBookService
// ---------------------------------------------------------------------------

/// Book storage service backed by MongoDB.
///
/// # Example
///
/// ```rust,ignore
/// use bookshelf::storage::MongoBookService;
///
/// let service = MongoBookService::connect("mongodb://localhost:27017/library", "bookshelf").await?;
/// let book = service.create(new_book).await?;
/// service.close().await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoBookService {
    client: Client,
    database: Database,
}

impl MongoBookService {
    /// Wrap an already-connected client
    pub fn new(client: Client, database: Database) -> Self {
        Self { client, database }
    }

    /// Connect and verify the deployment answers a ping
    ///
    /// The database named in the connection string wins over `fallback_database`.
    pub async fn connect(uri: &str, fallback_database: &str) -> Result<Self, StorageError> {
        let options = ClientOptions::parse(uri).await.map_err(connection_error)?;
        let client = Client::with_options(options).map_err(connection_error)?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(fallback_database));

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(connection_error)?;

        tracing::info!(database = database.name(), "Connected to MongoDB");

        Ok(Self::new(client, database))
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    fn collection(&self) -> Collection<Document> {
        self.database.collection(BOOKS_COLLECTION)
    }
}

#[async_trait]
impl BookService for MongoBookService {
    /// Insert a document and let the driver assign `_id`.
    async fn create(&self, book: NewBook) -> Result<Book, StorageError> {
        let result = self
            .collection()
            .insert_one(book_to_document(&book))
            .await
            .map_err(query_error("insert"))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StorageError::Corrupt {
                id: result.inserted_id.to_string(),
                message: "inserted id is not an ObjectId".to_string(),
            })?;

        tracing::debug!(id = %id, "inserted book");
        Ok(Book::from_parts(BookId::from(id), book))
    }

    /// Unsorted scan, in the server's natural order.
    async fn find(&self) -> Result<Vec<Book>, StorageError> {
        let cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(query_error("find"))?;

        let docs: Vec<Document> = cursor.try_collect().await.map_err(query_error("find"))?;

        docs.iter().map(document_to_book).collect()
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, StorageError> {
        let doc = self
            .collection()
            .find_one(doc! { "_id": id.object_id() })
            .await
            .map_err(query_error("find_one"))?;

        doc.as_ref().map(document_to_book).transpose()
    }

    /// Replace the whole document; zero matches is reported, not raised.
    async fn update_one(&self, id: &BookId, book: NewBook) -> Result<UpdateOutcome, StorageError> {
        let result = self
            .collection()
            .replace_one(doc! { "_id": id.object_id() }, book_to_document(&book))
            .await
            .map_err(query_error("replace_one"))?;

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete_one(&self, id: &BookId) -> Result<DeleteOutcome, StorageError> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id.object_id() })
            .await
            .map_err(query_error("delete_one"))?;

        Ok(DeleteOutcome {
            deleted: result.deleted_count,
        })
    }

    async fn close(&self) -> Result<(), StorageError> {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB client closed");
        Ok(())
    }
}
