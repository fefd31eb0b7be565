// Value predicates
//
// Field values are `serde_json::Value`s. Every check goes through one of the
// predicates below so the coercion rules live in a single place.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;

static INT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?(0|[1-9][0-9]*)$").unwrap());

static FLOAT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$").unwrap()
});

/// Null, the empty string, numeric zero, or an empty array/object.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(_) => false,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Null or the empty string. Pattern checks skip these.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// The string a scalar value is matched as. Arrays and objects have none.
pub fn text_form(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => Some(Cow::Borrowed("")),
        Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Numeric reading of a value: numbers as-is, strings when they parse.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_finite(s),
        _ => None,
    }
}

/// Parse a trimmed float string, rejecting values that overflow to infinity.
fn parse_finite(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if !FLOAT_REGEX.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Integer numbers, or strings holding a canonical integer that fits `i64`.
pub fn is_int(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_i64(),
        Value::String(s) => {
            let trimmed = s.trim();
            INT_REGEX.is_match(trimmed) && trimmed.parse::<i64>().is_ok()
        }
        _ => false,
    }
}

/// Any number, or a string in decimal/exponent float notation that fits `f64`.
pub fn is_float(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(s) => parse_finite(s).is_some(),
        _ => false,
    }
}

/// Booleans, integers 0/1, and the usual textual spellings.
pub fn is_bool(value: &Value) -> bool {
    match value {
        Value::Bool(_) => true,
        Value::Number(n) => matches!(n.as_i64(), Some(0) | Some(1)),
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "false" | "1" | "0" | "yes" | "no" | "on" | "off"
        ),
        _ => false,
    }
}

/// Arrays and objects.
pub fn is_collection(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}
