//! Lenient value coercions applied to raw API fields.
//!
//! None of these fail: anything that cannot be interpreted becomes the
//! type's empty value (`false`, `0`, `""`, empty list).

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Separators between items of a delimited list: ASCII comma or Arabic comma.
static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,،]").expect("static separator pattern"));

/// Boolean from a native bool, numeric `1` or `"true"/"1"/"yes"/"y"`.
pub fn flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => matches!(
            s.trim().to_lowercase().as_str(),
            "true" | "1" | "yes" | "y"
        ),
        _ => false,
    }
}

/// Number from a numeric value or numeric string; anything else is 0.
pub fn number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

/// Integer view of [`number`], truncated toward zero.
pub fn integer(value: &Value) -> i64 {
    number(value).trunc() as i64
}

/// Identifier as a string, whatever the source type.
pub fn id(value: &Value) -> String {
    match value {
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
            _ => n.to_string(),
        },
        other => text(other),
    }
}

/// Display text: strings as-is, scalars stringified, structures empty.
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// List of strings from a native list or a comma-delimited string.
///
/// Items are trimmed and empty items dropped.
pub fn list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| id(item).trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
        Value::String(s) => LIST_SEPARATOR
            .split(s)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}
