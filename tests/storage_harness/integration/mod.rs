//! HTTP integration harness
//!
//! Builds the full application router around any `BookService` and wraps it
//! in an `axum_test::TestServer`, so the REST suite runs against every
//! storage backend.


use axum::Router;
use axum_test::TestServer;
use bookshelf::core::BookService;
use bookshelf::server::ServerBuilder;

/// Router wired exactly as the binary wires it
pub fn build_test_router(service: impl BookService + 'static) -> Router {
    ServerBuilder::new()
        .with_book_service(service)
        .with_views_dir(super::views_dir())
        .build()
        .unwrap()
}

pub fn build_test_server(service: impl BookService + 'static) -> TestServer {
    TestServer::new(build_test_router(service))
}
