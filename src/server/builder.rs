//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::AppState;
use super::pages::Pages;
use super::router::build_router;
use crate::core::BookService;
use anyhow::Result;
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the book service HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_book_service(InMemoryBookService::new())
///     .with_views_dir("views")
///     .serve("127.0.0.1:8000")
///     .await?;
/// ```
pub struct ServerBuilder {
    book_service: Option<Arc<dyn BookService>>,
    views_dir: PathBuf,
    greeting: String,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            book_service: None,
            views_dir: PathBuf::from("views"),
            greeting: "Bookshelf".to_string(),
        }
    }

    /// Set the book service (required)
    pub fn with_book_service(mut self, service: impl BookService + 'static) -> Self {
        self.book_service = Some(Arc::new(service));
        self
    }

    /// Set a book service the caller keeps a handle to, e.g. to close it later
    pub fn with_shared_book_service(mut self, service: Arc<dyn BookService>) -> Self {
        self.book_service = Some(service);
        self
    }

    /// Directory holding the static pages
    pub fn with_views_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.views_dir = dir.into();
        self
    }

    /// Text served at `GET /`
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    /// Build the final router
    pub fn build(self) -> Result<Router> {
        let books = self
            .book_service
            .ok_or_else(|| anyhow::anyhow!("BookService is required. Call .with_book_service()"))?;

        let pages = Pages::new(self.views_dir);
        let missing = pages.missing();
        if !missing.is_empty() {
            tracing::warn!(
                views_dir = %pages.views_dir().display(),
                ?missing,
                "some page files are missing; their routes will answer 404"
            );
        }

        let state = AppState::new(books, self.greeting);
        Ok(build_router(state, &pages))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server started on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
