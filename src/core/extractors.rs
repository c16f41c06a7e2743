//! Axum extractors for path parameters

use crate::core::book::BookId;
use crate::core::error::ApiError;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

/// Well-formed book identifier taken from the `{id}` path segment
///
/// Rejects with 400 before the handler runs when the segment is not an
/// ObjectId.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookIdPath(pub BookId);

impl<S> FromRequestParts<S> for BookIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidId {
                value: e.body_text(),
            })?;

        raw.parse()
            .map(BookIdPath)
            .map_err(|_| ApiError::InvalidId { value: raw })
    }
}
