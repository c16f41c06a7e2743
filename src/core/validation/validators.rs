//! Reusable field validators
//!
//! Each validator receives the field name and its (already filtered) value and
//! returns the configured message on failure.

use serde_json::Value;

/// Validator: field is present and not empty
///
/// Missing and null values fail, as do blank strings and empty lists.
pub fn required(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| {
        let empty = match value {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => false,
        };

        if empty {
            Err(message.to_string())
        } else {
            Ok(())
        }
    }
}

/// Validator: value is a string
pub fn text(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| {
        if value.is_string() {
            Ok(())
        } else {
            Err(message.to_string())
        }
    }
}

/// Validator: value is an integer that fits in `i64`
///
/// Whole floats such as `412.0` must be collapsed by `filters::to_integer`
/// first.
pub fn whole_number(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| match value {
        Value::Number(n) if n.is_i64() => Ok(()),
        _ => Err(message.to_string()),
    }
}

/// Validator: value is a number
pub fn number(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| {
        if value.is_number() {
            Ok(())
        } else {
            Err(message.to_string())
        }
    }
}

/// Validator: value is a list of strings
pub fn text_list(
    message: &'static str,
) -> impl Fn(&str, &Value) -> Result<(), String> + Send + Sync + Clone {
    move |_: &str, value: &Value| match value {
        Value::Array(items) if items.iter().all(Value::is_string) => Ok(()),
        _ => Err(message.to_string()),
    }
}
