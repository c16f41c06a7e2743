//! Static HTML pages
//!
//! The pages are plain files in the views directory; the data they show is
//! loaded client-side from the `/api` routes.

use axum::routing::{MethodRouter, get_service};
use std::path::{Path, PathBuf};
use tower_http::services::ServeFile;

/// Listing page, served at `/books`
pub const BOOKS_PAGE: &str = "books.html";
/// Create form, served at `/book/add`
pub const ADD_BOOK_PAGE: &str = "add_book.html";
/// Detail page, served at `/book/{id}`
pub const BOOK_PAGE: &str = "book.html";
/// Edit form, served at `/book/edit/{id}`
pub const EDIT_BOOK_PAGE: &str = "edit-book.html";

/// Resolves page files relative to a views directory
#[derive(Debug, Clone)]
pub struct Pages {
    views_dir: PathBuf,
}

impl Pages {
    pub fn new(views_dir: impl Into<PathBuf>) -> Self {
        Self {
            views_dir: views_dir.into(),
        }
    }

    pub fn views_dir(&self) -> &Path {
        &self.views_dir
    }

    /// GET route serving one page file
    pub fn page<S>(&self, file: &str) -> MethodRouter<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        get_service(ServeFile::new(self.views_dir.join(file)))
    }

    /// Pages whose file is missing from the views directory
    pub fn missing(&self) -> Vec<&'static str> {
        [BOOKS_PAGE, ADD_BOOK_PAGE, BOOK_PAGE, EDIT_BOOK_PAGE]
            .into_iter()
            .filter(|file| !self.views_dir.join(file).is_file())
            .collect()
    }
}
