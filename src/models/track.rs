//! Track (msar) records. A track belongs to a degree, which belongs to a
//! department; the API returns the parent names either flat or nested under
//! `degree`.

use serde::Serialize;
use serde_json::{Value, json};

use crate::mapping::{FromRaw, Keys, RawRecord};

const ID: Keys = &["id", "Id"];
const NAME: Keys = &["name", "Name"];
const CODE: Keys = &["code", "Code"];
const DEGREE_ID: Keys = &["degreeId", "DegreeId", "degree.id", "Degree.Id"];
const DEGREE_NAME: Keys = &["degreeName", "DegreeName", "degree.name", "Degree.Name"];
const DEPARTMENT_ID: Keys = &[
    "departmentId",
    "DepartmentId",
    "degree.departmentId",
    "Degree.DepartmentId",
];
const DEPARTMENT_NAME: Keys = &[
    "departmentName",
    "DepartmentName",
    "degree.departmentName",
    "Degree.DepartmentName",
];
const CREATED_AT: Keys = &["createdAt", "CreatedAt"];
const UPDATED_AT: Keys = &["updatedAt", "UpdatedAt"];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDto {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub degree_id: i64,
    pub degree_name: String,
    pub department_id: i64,
    pub department_name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl FromRaw for TrackDto {
    fn from_raw(raw: &RawRecord<'_>) -> Self {
        Self {
            id: raw.integer(ID),
            name: raw.text(NAME),
            code: raw.text(CODE),
            degree_id: raw.integer(DEGREE_ID),
            degree_name: raw.text(DEGREE_NAME),
            department_id: raw.integer(DEPARTMENT_ID),
            department_name: raw.text(DEPARTMENT_NAME),
            created_at: raw.text(CREATED_AT),
            updated_at: raw.text(UPDATED_AT),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrackInput {
    pub name: String,
    pub code: String,
    pub degree_id: i64,
    pub department_id: i64,
}

impl TrackInput {
    /// Request body with the nested `degree` object the API expects.
    /// `department_name` is resolved by the caller.
    pub fn body(&self, id: Option<i64>, department_name: &str) -> Value {
        json!({
            "id": id.unwrap_or(0),
            "name": self.name.trim(),
            "code": self.code.trim(),
            "degreeId": self.degree_id,
            "departmentName": department_name,
            "degree": {
                "id": self.degree_id,
                "name": "",
                "description": "",
                "standardDurationYears": 0,
                "departmentId": self.department_id,
                "departmentName": department_name,
                "generalDegree": "",
            },
        })
    }
}
