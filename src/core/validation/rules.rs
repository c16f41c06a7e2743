//! Field rules for book payloads
//!
//! A [`BookRules`] holds, per field, an ordered list of filters followed by
//! an ordered list of validators. Every field is checked on every request;
//! a field reports at most its first failing validator.

use super::{filters, validators};
use crate::core::error::FieldValidationError;
use serde_json::{Map, Value};
use std::sync::LazyLock;

type Filter = Box<dyn Fn(&str, Value) -> Value + Send + Sync>;
type Validator = Box<dyn Fn(&str, &Value) -> Result<(), String> + Send + Sync>;

/// Filters and validators for one field
pub struct FieldRules {
    name: &'static str,
    filters: Vec<Filter>,
    validators: Vec<Validator>,
}

impl FieldRules {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            filters: Vec::new(),
            validators: Vec::new(),
        }
    }

    /// Append a filter, run in declaration order before any validator
    pub fn filter(mut self, f: impl Fn(&str, Value) -> Value + Send + Sync + 'static) -> Self {
        self.filters.push(Box::new(f));
        self
    }

    /// Append a validator
    pub fn validate(
        mut self,
        v: impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validators.push(Box::new(v));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, value: Value) -> Result<Value, FieldValidationError> {
        let value = self
            .filters
            .iter()
            .fold(value, |value, filter| filter(self.name, value));

        for validator in &self.validators {
            validator(self.name, &value)
                .map_err(|message| FieldValidationError::new(self.name, message))?;
        }

        Ok(value)
    }
}

/// Rule set for a whole payload
pub struct BookRules {
    fields: Vec<FieldRules>,
}

static BOOK_RULES: LazyLock<BookRules> = LazyLock::new(BookRules::build);

impl BookRules {
    /// Rules applied to create and update bodies
    pub fn standard() -> &'static BookRules {
        &BOOK_RULES
    }

    fn build() -> Self {
        Self::new(vec![
            FieldRules::new("title")
                .filter(filters::trim())
                .validate(validators::required("Title is required"))
                .validate(validators::text("Title must be text")),
            FieldRules::new("author")
                .filter(filters::trim())
                .validate(validators::required("Author is required"))
                .validate(validators::text("Author must be text")),
            FieldRules::new("pages")
                .filter(filters::trim())
                .filter(filters::parse_number())
                .filter(filters::to_integer())
                .validate(validators::required("Pages is required"))
                .validate(validators::whole_number("Pages must be a whole number")),
            FieldRules::new("rating")
                .filter(filters::trim())
                .filter(filters::parse_number())
                .validate(validators::required("Rating is required"))
                .validate(validators::number("Rating must be a number")),
            FieldRules::new("genres")
                .filter(filters::split_labels())
                .filter(filters::trim())
                .validate(validators::required("Genre is required"))
                .validate(validators::text_list("Genres must be text labels")),
        ])
    }

    pub fn new(fields: Vec<FieldRules>) -> Self {
        Self { fields }
    }

    /// Filter and validate a payload
    ///
    /// Returns an object holding only the ruled fields, or every failure.
    /// Non-object payloads are treated as empty.
    pub fn validate_and_filter(&self, payload: Value) -> Result<Value, Vec<FieldValidationError>> {
        let mut input = match payload {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let mut output = Map::new();
        let mut errors = Vec::new();

        for field in &self.fields {
            let value = input.remove(field.name()).unwrap_or(Value::Null);
            match field.apply(value) {
                Ok(value) => {
                    output.insert(field.name().to_string(), value);
                }
                Err(error) => errors.push(error),
            }
        }

        if errors.is_empty() {
            Ok(Value::Object(output))
        } else {
            Err(errors)
        }
    }
}
