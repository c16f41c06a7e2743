//! HTTP server: handlers, static pages, the dispatch table, and a builder
//! that wires them to a `BookService`

pub mod builder;
pub mod handlers;
pub mod pages;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
pub use pages::Pages;
pub use router::build_router;
