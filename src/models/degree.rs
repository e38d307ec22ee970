//! Degree records.

use serde::Serialize;
use serde_json::{Value, json};

use crate::mapping::{FromRaw, Keys, RawRecord};

const ID: Keys = &["id", "Id"];
const NAME: Keys = &["name", "Name"];
const DESCRIPTION: Keys = &["description", "Description"];
const DURATION: Keys = &["standardDurationYears", "StandardDurationYears"];
const DEPARTMENT_ID: Keys = &["departmentId", "DepartmentId"];
const DEPARTMENT_NAME: Keys = &["departmentName", "DepartmentName"];
const GENERAL_DEGREE: Keys = &["generalDegree", "GeneralDegree"];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DegreeDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub standard_duration_years: i64,
    pub department_id: i64,
    pub department_name: String,
    pub general_degree: String,
}

impl FromRaw for DegreeDto {
    fn from_raw(raw: &RawRecord<'_>) -> Self {
        Self {
            id: raw.integer(ID),
            name: raw.text(NAME),
            description: raw.text(DESCRIPTION),
            standard_duration_years: raw.integer(DURATION),
            department_id: raw.integer(DEPARTMENT_ID),
            department_name: raw.text(DEPARTMENT_NAME),
            general_degree: raw.id(GENERAL_DEGREE),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DegreeInput {
    pub name: String,
    pub description: String,
    pub standard_duration_years: Option<u32>,
    pub department_id: i64,
    pub general_degree: String,
}

impl DegreeInput {
    pub fn body(&self, id: Option<i64>) -> Value {
        let mut body = json!({
            "name": self.name.trim(),
            "description": self.description.trim(),
            "standardDurationYears": self.standard_duration_years,
            "departmentId": self.department_id,
            "generalDegree": self.general_degree,
        });
        if let (Some(id), Some(fields)) = (id, body.as_object_mut()) {
            fields.insert("id".into(), id.into());
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_degree_accepts_numbers() {
        let degree = DegreeDto::from_value(&json!({"Id": 1, "GeneralDegree": 2, "StandardDurationYears": "4"}));
        assert_eq!(degree.general_degree, "2");
        assert_eq!(degree.standard_duration_years, 4);
    }

    #[test]
    fn test_body_keeps_missing_duration_null() {
        let body = DegreeInput {
            name: "MSc".into(),
            department_id: 3,
            ..Default::default()
        }
        .body(None);
        assert_eq!(body["standardDurationYears"], Value::Null);
        assert_eq!(body["departmentId"], 3);
    }
}
