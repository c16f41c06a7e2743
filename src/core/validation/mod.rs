//! Validation and filtering of book payloads
//!
//! Request bodies for create and update go through the [`ValidatedBook`]
//! extractor, which normalizes fields with [`filters`], checks them with
//! [`validators`], and reports every failing field at once.

pub mod extractor;
pub mod filters;
pub mod rules;
pub mod validators;

pub use extractor::ValidatedBook;
pub use rules::{BookRules, FieldRules};
