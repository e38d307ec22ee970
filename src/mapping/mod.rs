// src/mapping/mod.rs

//! Mapping of raw API records into typed models.
//!
//! The backend is inconsistent about field casing and nesting, so each model
//! declares an ordered list of candidate keys per field. A key may be a
//! dotted path (`degree.departmentName`) into a nested object. The first
//! candidate that holds a usable value wins, and the value is coerced with
//! the functions in [`coerce`]. Mapping never fails.

pub mod coerce;

use serde_json::Value;

/// Ordered candidate keys for one target field.
pub type Keys = &'static [&'static str];

/// A model that can be built from a raw API record.
pub trait FromRaw: Sized {
    fn from_raw(raw: &RawRecord<'_>) -> Self;

    /// Map a single raw value.
    fn from_value(value: &Value) -> Self {
        Self::from_raw(&RawRecord::new(value))
    }
}

/// Map every element of a raw array. Anything that is not an array maps
/// to an empty list.
pub fn map_list<T: FromRaw>(value: &Value) -> Vec<T> {
    value
        .as_array()
        .map(|items| items.iter().map(T::from_value).collect())
        .unwrap_or_default()
}

/// Read-only view over one raw record.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    value: &'a Value,
}

impl<'a> RawRecord<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// First candidate holding a value that is neither null nor blank text.
    pub fn pick(&self, keys: Keys) -> Option<&'a Value> {
        keys.iter()
            .filter_map(|key| resolve(self.value, key))
            .find(|value| is_present(value))
    }

    pub fn text(&self, keys: Keys) -> String {
        self.pick(keys).map(coerce::text).unwrap_or_default()
    }

    pub fn id(&self, keys: Keys) -> String {
        self.pick(keys).map(coerce::id).unwrap_or_default()
    }

    pub fn number(&self, keys: Keys) -> f64 {
        self.pick(keys).map(coerce::number).unwrap_or_default()
    }

    pub fn integer(&self, keys: Keys) -> i64 {
        self.pick(keys).map(coerce::integer).unwrap_or_default()
    }

    pub fn flag(&self, keys: Keys) -> bool {
        self.pick(keys).is_some_and(coerce::flag)
    }

    pub fn list(&self, keys: Keys) -> Vec<String> {
        self.pick(keys).map(coerce::list).unwrap_or_default()
    }

    /// Nested records under the first candidate holding an array.
    pub fn records(&self, keys: Keys) -> Vec<RawRecord<'a>> {
        self.pick(keys)
            .and_then(Value::as_array)
            .map(|items| items.iter().map(RawRecord::new).collect())
            .unwrap_or_default()
    }
}

fn resolve<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, segment| current.as_object()?.get(segment))
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Sample {
        code: String,
        hours: i64,
        optional: bool,
        department: String,
    }

    impl FromRaw for Sample {
        fn from_raw(raw: &RawRecord<'_>) -> Self {
            Self {
                code: raw.text(&["code", "Code"]),
                hours: raw.integer(&["creditHours", "CreditHours"]),
                optional: raw.flag(&["isOptional", "IsOptional"]),
                department: raw.text(&["departmentName", "degree.departmentName"]),
            }
        }
    }

    #[test]
    fn test_candidate_keys_in_order() {
        let sample = Sample::from_value(&json!({
            "Code": "CS101",
            "CreditHours": "3",
            "IsOptional": "yes",
            "degree": { "departmentName": "Computer Science" }
        }));
        assert_eq!(
            sample,
            Sample {
                code: "CS101".into(),
                hours: 3,
                optional: true,
                department: "Computer Science".into(),
            }
        );
    }

    #[test]
    fn test_blank_candidate_falls_through() {
        let sample = Sample::from_value(&json!({
            "code": null,
            "Code": "X1",
            "departmentName": "",
            "degree": { "departmentName": "Math" }
        }));
        assert_eq!(sample.code, "X1");
        assert_eq!(sample.department, "Math");
    }

    #[test]
    fn test_non_object_maps_to_defaults() {
        let sample = Sample::from_value(&json!("garbage"));
        assert_eq!(sample.code, "");
        assert_eq!(sample.hours, 0);
        assert!(!sample.optional);
    }

    #[test]
    fn test_map_list_ignores_non_arrays() {
        let items: Vec<Sample> = map_list(&json!({"code": "A"}));
        assert!(items.is_empty());
        let items: Vec<Sample> = map_list(&json!([{"code": "A"}, {"Code": "B"}]));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].code, "B");
    }
}
