//! Reusable field filters
//!
//! These filters normalize field values before validation. HTML forms submit
//! everything as text, so numbers and label lists arrive as strings.

use serde_json::{Number, Value};

/// Filter: trim whitespace from a string, or from every string in a list
pub fn trim() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Value::String(s.trim().to_string()),
                    other => other,
                })
                .collect(),
        ),
        other => other,
    }
}

/// Filter: turn a comma-separated string into a list of labels
///
/// Lists are kept as lists. Blank labels are dropped in both cases.
pub fn split_labels() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| {
        let labels: Vec<Value> = match value {
            Value::String(s) => s
                .split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(|label| Value::String(label.to_string()))
                .collect(),
            Value::Array(items) => items
                .into_iter()
                .filter(|item| !matches!(item, Value::String(s) if s.trim().is_empty()))
                .collect(),
            other => return other,
        };
        Value::Array(labels)
    }
}

/// Filter: parse a numeric string into a JSON number
///
/// Strings that do not parse are left alone for the validator to reject.
pub fn parse_number() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| {
        let Value::String(s) = &value else {
            return value;
        };

        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Value::Number(n.into());
        }
        match trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
            Some(n) => Value::Number(n),
            None => value,
        }
    }
}

/// Filter: collapse a whole floating-point number into an integer
pub fn to_integer() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| match value.as_f64() {
        Some(f) if value.is_f64() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            Value::Number((f as i64).into())
        }
        _ => value,
    }
}
