//! Axum extractor for validated book payloads
//!
//! `ValidatedBook` runs before the create and update handlers. It accepts JSON
//! and URL-encoded bodies, applies [`BookRules`], and either rejects the
//! request with every failed field or hands a typed [`NewBook`] onward.

use super::rules::BookRules;
use crate::core::book::NewBook;
use crate::core::error::ApiError;
use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::{Map, Value};

/// Body encodings the extractor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Unsupported,
}

fn body_kind(req: &Request) -> BodyKind {
    let Some(content_type) = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return BodyKind::Unsupported;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Unsupported
    }
}

/// Fold URL-encoded pairs into a JSON object
///
/// Repeated keys become arrays, and a trailing `[]` on a key is ignored, so
/// both `genres=a&genres=b` and `genres[]=a&genres[]=b` produce a list.
pub fn form_pairs_to_object(pairs: Vec<(String, String)>) -> Value {
    let mut map = Map::new();

    for (key, value) in pairs {
        let key = if key.ends_with("[]") {
            key[..key.len() - 2].to_string()
        } else {
            key
        };

        match map.get_mut(&key) {
            Some(Value::Array(items)) => items.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
            None => {
                map.insert(key, Value::String(value));
            }
        }
    }

    Value::Object(map)
}

/// Validated create/update payload
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_book(
///     State(state): State<AppState>,
///     ValidatedBook(book): ValidatedBook,
/// ) -> Result<Json<MessageResponse>, ApiError> {
///     // book already passed every field rule
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedBook(pub NewBook);

impl ValidatedBook {
    pub fn into_inner(self) -> NewBook {
        self.0
    }
}

impl<S> FromRequest<S> for ValidatedBook
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = match body_kind(&req) {
            BodyKind::Json => {
                let Json(payload): Json<Value> = Json::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::InvalidBody {
                        message: e.body_text(),
                    })?;
                if !payload.is_object() {
                    return Err(ApiError::InvalidBody {
                        message: "expected a JSON object".to_string(),
                    });
                }
                payload
            }
            BodyKind::Form => {
                let Form(pairs): Form<Vec<(String, String)>> = Form::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::InvalidBody {
                        message: e.body_text(),
                    })?;
                form_pairs_to_object(pairs)
            }
            BodyKind::Unsupported => Value::Object(Map::new()),
        };

        let filtered = BookRules::standard()
            .validate_and_filter(payload)
            .map_err(ApiError::Validation)?;

        let book = serde_json::from_value(filtered).map_err(|e| ApiError::InvalidBody {
            message: e.to_string(),
        })?;

        Ok(ValidatedBook(book))
    }
}
