//! Book record types
//!
//! A [`Book`] is the only persisted entity. Its identifier is a MongoDB
//! ObjectId wrapped in [`BookId`] so that handlers never deal with raw
//! strings once the path has been parsed.
//!
//! [`NewBook`] carries every field except the identifier. It is the payload
//! of both create and update: an update replaces all fields at once.

use mongodb::bson::oid::ObjectId;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Opaque identifier assigned by the persistence layer on creation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(ObjectId);

/// Returned when a string is not a well-formed book identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid book id")]
pub struct ParseBookIdError(pub String);

impl BookId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// The underlying ObjectId, as stored in the `_id` field
    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    /// 24-character lowercase hex form
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for BookId {
    fn from(id: ObjectId) -> Self {
        Self(id)
    }
}

impl FromStr for BookId {
    type Err = ParseBookIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| ParseBookIdError(s.to_string()))
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl Serialize for BookId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Full field set of a book, without its identifier
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub pages: i64,
    pub rating: f64,
    pub genres: Vec<String>,
}

/// A persisted book
///
/// Serialized with `_id` as the identifier key, which is what the browsing
/// pages read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub pages: i64,
    pub rating: f64,
    pub genres: Vec<String>,
}

impl Book {
    /// Attach an identifier to a field set
    pub fn from_parts(id: BookId, fields: NewBook) -> Self {
        let NewBook {
            title,
            author,
            pages,
            rating,
            genres,
        } = fields;

        Self {
            id,
            title,
            author,
            pages,
            rating,
            genres,
        }
    }

    /// Split into identifier and field set
    pub fn into_parts(self) -> (BookId, NewBook) {
        (
            self.id,
            NewBook {
                title: self.title,
                author: self.author,
                pages: self.pages,
                rating: self.rating,
                genres: self.genres,
            },
        )
    }
}
