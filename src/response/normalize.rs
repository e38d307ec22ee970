// src/response/normalize.rs

//! Collapse the backend's response envelopes into one shape.
//!
//! The API answers in several forms depending on the endpoint:
//!
//! - `{ succeeded, data, message, errors }` envelopes (either casing)
//! - a bare JSON array
//! - a bare JSON object (single-record lookups)
//! - a bare `true` (some deletes)
//! - plain text, or nothing at all
//!
//! [`normalize`] reduces all of these to a [`Normalized`] value.

use serde_json::Value;

use crate::mapping::{Keys, RawRecord, coerce};

const SUCCEEDED: Keys = &["succeeded", "Succeeded"];
const DATA: Keys = &["data", "Data"];
const MESSAGE: Keys = &["message", "Message"];
const TITLE: Keys = &["title", "Title"];
const ERRORS: Keys = &["errors", "Errors"];

/// Response body, parsed as JSON when possible.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Text(String),
}

impl Body {
    pub fn parse(text: &str) -> Self {
        serde_json::from_str(text)
            .map(Self::Json)
            .unwrap_or_else(|_| Self::Text(text.to_string()))
    }
}

/// Payload shape an endpoint is expected to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    List,
    Record,
    Any,
}

impl Shape {
    fn accepts(self, data: &Value) -> bool {
        match self {
            Self::List => data.is_array(),
            Self::Record => data.is_object(),
            Self::Any => true,
        }
    }
}

/// Uniform view of a response.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub success: bool,
    pub data: Value,
    pub message: Option<String>,
    pub errors: Vec<String>,
    /// Whether the body carried a `succeeded` flag.
    pub enveloped: bool,
}

impl Normalized {
    fn success(data: Value, message: Option<String>, enveloped: bool) -> Self {
        Self {
            success: true,
            data,
            message,
            errors: Vec::new(),
            enveloped,
        }
    }
}

/// Normalize a response body given its HTTP success flag.
pub fn normalize(body: &Body, http_ok: bool, shape: Shape) -> Normalized {
    let value = match body {
        Body::Json(value) => value,
        Body::Text(text) => {
            let text = text.trim();
            return Normalized {
                success: http_ok,
                data: Value::Null,
                message: (!text.is_empty()).then(|| text.to_string()),
                errors: Vec::new(),
                enveloped: false,
            };
        }
    };

    let record = RawRecord::new(value);
    let message = record.pick(MESSAGE).map(coerce::text);
    let succeeded = record.pick(SUCCEEDED);

    if http_ok {
        if let Some(succeeded) = succeeded {
            let data = record.pick(DATA).cloned().unwrap_or(Value::Null);
            if coerce::flag(succeeded) && shape.accepts(&data) {
                return Normalized::success(data, message, true);
            }
        } else {
            match value {
                Value::Array(_) => return Normalized::success(value.clone(), None, false),
                Value::Bool(true) => return Normalized::success(Value::Null, None, false),
                Value::Object(_) if shape != Shape::List => {
                    return Normalized::success(value.clone(), message, false);
                }
                _ => {}
            }
        }
    }

    let errors = collect_errors(&record);
    Normalized {
        success: false,
        data: Value::Null,
        message: failure_message(value, &record),
        errors,
        enveloped: succeeded.is_some(),
    }
}

/// Best message for a failed response: `message`, then `title`, then the
/// first entry of the first field in `errors`.
fn failure_message(value: &Value, record: &RawRecord<'_>) -> Option<String> {
    if let Value::String(text) = value {
        let text = text.trim();
        return (!text.is_empty()).then(|| text.to_string());
    }

    record
        .pick(MESSAGE)
        .or_else(|| record.pick(TITLE))
        .map(coerce::text)
        .filter(|text| !text.is_empty())
        .or_else(|| match record.pick(ERRORS)? {
            Value::Object(fields) => fields.values().find_map(first_text),
            other => first_text(other),
        })
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => items.iter().find_map(first_text),
        other => Some(coerce::text(other)).filter(|text| !text.is_empty()),
    }
}

/// Flatten `errors`, whether a list or a field-to-messages map.
fn collect_errors(record: &RawRecord<'_>) -> Vec<String> {
    let mut errors = Vec::new();
    match record.pick(ERRORS) {
        Some(Value::Object(fields)) => fields.values().for_each(|v| flatten(v, &mut errors)),
        Some(other) => flatten(other, &mut errors),
        None => {}
    }
    errors
}

fn flatten(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Array(items) => items.iter().for_each(|item| flatten(item, out)),
        other => {
            let text = coerce::text(other);
            if !text.is_empty() {
                out.push(text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn json(value: Value, ok: bool, shape: Shape) -> Normalized {
        normalize(&Body::Json(value), ok, shape)
    }

    #[test]
    fn test_envelope_with_list_data() {
        let n = json(
            json!({"succeeded": true, "data": [{"id": 1}], "message": "ok"}),
            true,
            Shape::List,
        );
        assert!(n.success);
        assert_eq!(n.data, json!([{"id": 1}]));
        assert_eq!(n.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_pascal_case_envelope() {
        let n = json(json!({"Succeeded": true, "Data": {"id": 2}}), true, Shape::Record);
        assert!(n.success);
        assert_eq!(n.data, json!({"id": 2}));
    }

    #[test]
    fn test_envelope_with_wrong_shape_fails() {
        let n = json(
            json!({"succeeded": true, "data": null, "message": "nothing"}),
            true,
            Shape::List,
        );
        assert!(!n.success);
        assert!(n.enveloped);
        assert_eq!(n.message.as_deref(), Some("nothing"));
    }

    #[test]
    fn test_unrecognized_body_is_not_enveloped() {
        let n = json(json!(42), true, Shape::Any);
        assert!(!n.success);
        assert!(!n.enveloped);
        assert!(n.message.is_none());
    }

    #[test]
    fn test_bare_array_and_bare_true() {
        assert!(json(json!([]), true, Shape::List).success);
        let n = json(json!(true), true, Shape::Any);
        assert!(n.success);
        assert_eq!(n.data, Value::Null);
        assert!(!json(json!(false), true, Shape::Any).success);
    }

    #[test]
    fn test_bare_object_is_a_record_not_a_list() {
        assert!(json(json!({"nationalId": "1"}), true, Shape::Record).success);
        assert!(!json(json!({"nationalId": "1"}), true, Shape::List).success);
    }

    #[test]
    fn test_http_failure_overrides_body() {
        let n = json(json!([1, 2]), false, Shape::List);
        assert!(!n.success);
    }

    #[test]
    fn test_failure_message_precedence() {
        let n = json(json!({"title": "Bad", "message": "Worse"}), false, Shape::Any);
        assert_eq!(n.message.as_deref(), Some("Worse"));

        let n = json(json!({"title": "Bad"}), false, Shape::Any);
        assert_eq!(n.message.as_deref(), Some("Bad"));

        let n = json(
            json!({"errors": {"Name": ["Name is required"], "Code": ["Too short"]}}),
            false,
            Shape::Any,
        );
        assert_eq!(n.message.as_deref(), Some("Name is required"));
        assert_eq!(n.errors, vec!["Name is required", "Too short"]);
    }

    #[test]
    fn test_error_list_is_flattened() {
        let n = json(json!({"succeeded": false, "errors": ["a", "b"]}), true, Shape::Any);
        assert!(!n.success);
        assert_eq!(n.errors, vec!["a", "b"]);
        assert_eq!(n.message.as_deref(), Some("a"));
    }

    #[test]
    fn test_text_body_uses_http_status() {
        let n = normalize(&Body::parse("Deleted"), true, Shape::Any);
        assert!(n.success);
        assert_eq!(n.message.as_deref(), Some("Deleted"));

        let n = normalize(&Body::parse("<html>oops</html>"), false, Shape::List);
        assert!(!n.success);
        assert_eq!(n.message.as_deref(), Some("<html>oops</html>"));

        let n = normalize(&Body::parse(""), true, Shape::Any);
        assert!(n.success);
        assert!(n.message.is_none());
    }

    #[test]
    fn test_json_string_body_is_message() {
        let n = json(json!("Something broke"), false, Shape::Any);
        assert_eq!(n.message.as_deref(), Some("Something broke"));
    }
}
