//! Tolerant readers over `serde_json::Value`.
//!
//! Scanner output comes from an independently versioned tool, so field
//! presence and numeric encoding are not guaranteed. These helpers default
//! instead of failing: absent or mistyped scalars become zero or `None`.

use serde_json::Value;

/// Integer read tolerant of float encodings (`5` and `5.0` both read as 5).
pub fn as_int(value: &Value) -> i64 {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .unwrap_or(0)
}

/// Text form of a scalar: strings verbatim, numbers and bools via display.
/// `null` and missing both read as `None`.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Integer field of an optional object, defaulting to zero.
pub fn int_field(obj: Option<&Value>, key: &str) -> i64 {
    obj.and_then(|o| o.get(key)).map(as_int).unwrap_or(0)
}

/// Float field of an optional object, defaulting to zero.
pub fn float_field(obj: Option<&Value>, key: &str) -> f64 {
    obj.and_then(|o| o.get(key))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

/// String field of an optional object, with a caller-supplied default.
pub fn str_field(obj: Option<&Value>, key: &str, default: &str) -> String {
    obj.and_then(|o| o.get(key))
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Text field of an object, with a caller-supplied default.
pub fn text_field(obj: &Value, key: &str, default: &str) -> String {
    obj.get(key)
        .and_then(as_text)
        .unwrap_or_else(|| default.to_string())
}
