//! Macro-generated test suite for `BookService` contract validation.
//!
//! The `book_service_tests!` macro generates a test module that validates any
//! `BookService` implementation: create, find, find_by_id, update_one,
//! delete_one, and concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use bookshelf::storage::InMemoryBookService;
//!
//! book_service_tests!(InMemoryBookService::new());
//! ```

/// Generate a full `BookService` conformance test suite.
///
/// `$factory` must be an expression that evaluates to a fresh, empty instance
/// implementing `BookService + 'static`. It is re-evaluated for each test.
#[macro_export]
macro_rules! book_service_tests {
    ($factory:expr) => {
        mod book_service_contract_tests {
            use super::*;
            use bookshelf::core::{BookId, BookService, DeleteOutcome};
            use std::collections::HashSet;
            use std::sync::Arc;

            // ==================================================================
            // Create & find_by_id
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_find_by_id() {
                let service = $factory;

                let created = service.create(dune()).await.unwrap();
                assert_eq!(created.title, "Dune");

                let found = service.find_by_id(&created.id).await.unwrap();
                assert_eq!(found, Some(created.clone()));

                let (_, fields) = found.unwrap().into_parts();
                assert_eq!(fields, dune());
            }

            #[tokio::test]
            async fn test_find_by_id_unknown_returns_none() {
                let service = $factory;
                service.create(dune()).await.unwrap();

                let found = service.find_by_id(&BookId::new()).await.unwrap();
                assert!(found.is_none());
            }

            #[tokio::test]
            async fn test_ids_are_unique() {
                let service = $factory;
                let a = service.create(dune()).await.unwrap();
                let b = service.create(dune()).await.unwrap();

                assert_ne!(a.id, b.id);
            }

            // ==================================================================
            // Find
            // ==================================================================

            #[tokio::test]
            async fn test_find_empty() {
                let service = $factory;

                let all = service.find().await.unwrap();
                assert!(all.is_empty());
            }

            #[tokio::test]
            async fn test_find_returns_every_book() {
                let service = $factory;
                let mut created = HashSet::new();
                for i in 0..5 {
                    let book = service
                        .create(sample_book(&format!("Volume {}", i), "Author", 100 + i, 3.5, &["saga"]))
                        .await
                        .unwrap();
                    created.insert(book.id);
                }

                let all = service.find().await.unwrap();
                assert_eq!(all.len(), 5);
                let found: HashSet<BookId> = all.iter().map(|b| b.id).collect();
                assert_eq!(found, created);
            }

            // ==================================================================
            // Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_replaces_every_field() {
                let service = $factory;
                let created = service.create(dune()).await.unwrap();
                let replacement =
                    sample_book("Dune Messiah", "Frank Herbert", 256, 4.0, &["scifi", "sequel"]);

                let outcome = service
                    .update_one(&created.id, replacement.clone())
                    .await
                    .unwrap();
                assert_eq!(outcome.matched, 1);
                assert_eq!(outcome.modified, 1);

                let (id, fields) = service
                    .find_by_id(&created.id)
                    .await
                    .unwrap()
                    .unwrap()
                    .into_parts();
                assert_eq!(id, created.id);
                assert_eq!(fields, replacement);
            }

            #[tokio::test]
            async fn test_update_unknown_matches_nothing() {
                let service = $factory;

                let outcome = service.update_one(&BookId::new(), dune()).await.unwrap();
                assert_eq!(outcome.matched, 0);
                assert!(service.find().await.unwrap().is_empty());
            }

            // ==================================================================
            // Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing_then_again() {
                let service = $factory;
                let created = service.create(dune()).await.unwrap();

                let first = service.delete_one(&created.id).await.unwrap();
                assert_eq!(first, DeleteOutcome { deleted: 1 });
                assert!(service.find_by_id(&created.id).await.unwrap().is_none());

                let second = service.delete_one(&created.id).await.unwrap();
                assert_eq!(second, DeleteOutcome { deleted: 0 });
            }

            #[tokio::test]
            async fn test_delete_leaves_other_books() {
                let service = $factory;
                let keep = service.create(dune()).await.unwrap();
                let gone = service
                    .create(sample_book("Emma", "Austen", 474, 4.0, &["classic"]))
                    .await
                    .unwrap();

                service.delete_one(&gone.id).await.unwrap();

                let all = service.find().await.unwrap();
                assert_eq!(all, vec![keep]);
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_creates() {
                let service = Arc::new($factory);

                let mut handles = Vec::new();
                for i in 0..10 {
                    let service = service.clone();
                    handles.push(tokio::spawn(async move {
                        service
                            .create(sample_book(&format!("Book {}", i), "Author", i, 1.0, &["x"]))
                            .await
                            .unwrap()
                    }));
                }
                for handle in handles {
                    handle.await.unwrap();
                }

                assert_eq!(service.find().await.unwrap().len(), 10);
            }
        }
    };
}
