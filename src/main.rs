use bookshelf::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    // RUST_LOG wins over the configured filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    let books: Arc<dyn BookService> = match &config.database_url {
        Some(url) => Arc::new(MongoBookService::connect(url, &config.database_name).await?),
        None => {
            tracing::warn!("DB_HOST is not set; books are kept in memory and lost on exit");
            Arc::new(InMemoryBookService::new())
        }
    };

    let served = ServerBuilder::new()
        .with_shared_book_service(books.clone())
        .with_views_dir(&config.views_dir)
        .with_greeting(config.greeting.clone())
        .serve(&config.bind_addr())
        .await;

    if let Err(e) = books.close().await {
        tracing::error!("failed to close book storage: {}", e);
    }

    served
}
