//! Cross-cutting input validation
//!
//! Request bodies are read as loose JSON objects so that every endpoint can
//! answer missing or malformed fields with a 400 envelope naming the field.
//! Numeric fields accept JSON numbers as well as numeric strings.

use crate::error::app_error::{AppError, AppResult};
use serde_json::{Map, Value};

pub type JsonObject = Map<String, Value>;

/// Borrow the body as an object
pub fn as_object(body: &Value) -> AppResult<&JsonObject> {
    body.as_object()
        .ok_or_else(|| AppError::bad_request("Request body must be a JSON object"))
}

/// Fetch a required field; `null` counts as missing
pub fn require_field<'a>(body: &'a JsonObject, field: &str) -> AppResult<&'a Value> {
    match body.get(field) {
        Some(Value::Null) | None => Err(AppError::bad_request(format!("Missing field: {field}"))),
        Some(value) => Ok(value),
    }
}

/// Same as [`require_field`], worded for calculator parameters
pub fn require_param<'a>(body: &'a JsonObject, field: &str) -> AppResult<&'a Value> {
    match body.get(field) {
        Some(Value::Null) | None => {
            Err(AppError::bad_request(format!("Missing parameter: {field}")))
        }
        Some(value) => Ok(value),
    }
}

/// Fetch an optional field; `null` counts as absent
pub fn optional_field<'a>(body: &'a JsonObject, field: &str) -> Option<&'a Value> {
    body.get(field).filter(|v| !v.is_null())
}

/// Coerce a JSON number or numeric string into a finite `f64`
pub fn coerce_f64(field: &str, value: &Value) -> AppResult<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::bad_request(format!("Invalid numeric value for {field}")))
}

/// Coerce a JSON number or integer string into an `i64`
///
/// Fractional numbers are truncated toward zero.
pub fn coerce_i64(field: &str, value: &Value) -> AppResult<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|v| v.is_finite() && v.abs() < i64::MAX as f64)
                .map(|v| v.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| AppError::bad_request(format!("Invalid integer value for {field}")))
}

/// Render a JSON scalar as text (strings verbatim, numbers and booleans via `Display`)
pub fn coerce_string(field: &str, value: &Value) -> AppResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(AppError::bad_request(format!("Invalid value for {field}"))),
    }
}

/// Required field coerced to `f64`
pub fn required_f64(body: &JsonObject, field: &str) -> AppResult<f64> {
    coerce_f64(field, require_field(body, field)?)
}

/// Required field coerced to `i64`
pub fn required_i64(body: &JsonObject, field: &str) -> AppResult<i64> {
    coerce_i64(field, require_field(body, field)?)
}

/// Required field rendered as text
pub fn required_string(body: &JsonObject, field: &str) -> AppResult<String> {
    coerce_string(field, require_field(body, field)?)
}

/// Optional field coerced to `f64`
pub fn optional_f64(body: &JsonObject, field: &str) -> AppResult<Option<f64>> {
    optional_field(body, field)
        .map(|v| coerce_f64(field, v))
        .transpose()
}

/// Optional field coerced to `i64`
pub fn optional_i64(body: &JsonObject, field: &str) -> AppResult<Option<i64>> {
    optional_field(body, field)
        .map(|v| coerce_i64(field, v))
        .transpose()
}

/// Optional field rendered as text
pub fn optional_string(body: &JsonObject, field: &str) -> AppResult<Option<String>> {
    optional_field(body, field)
        .map(|v| coerce_string(field, v))
        .transpose()
}
