//! Colleges and universities.

use serde::Serialize;
use serde_json::{Value, json};

use crate::mapping::{FromRaw, Keys, RawRecord};

const ID: Keys = &["id", "Id"];
const NAME: Keys = &["name", "Name"];
const UNIVERSITY_ID: Keys = &["universityId", "UniversityId", "university.id", "University.Id"];
const UNIVERSITY_NAME: Keys = &[
    "universityName",
    "UniversityName",
    "university.name",
    "University.Name",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeDto {
    pub id: i64,
    pub name: String,
    pub university_id: i64,
    pub university_name: String,
}

impl FromRaw for CollegeDto {
    fn from_raw(raw: &RawRecord<'_>) -> Self {
        Self {
            id: raw.integer(ID),
            name: raw.text(NAME),
            university_id: raw.integer(UNIVERSITY_ID),
            university_name: raw.text(UNIVERSITY_NAME),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UniversityDto {
    pub id: i64,
    pub name: String,
}

impl FromRaw for UniversityDto {
    fn from_raw(raw: &RawRecord<'_>) -> Self {
        Self {
            id: raw.integer(ID),
            name: raw.text(NAME),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollegeInput {
    pub name: String,
    pub university_id: Option<i64>,
}

impl CollegeInput {
    pub fn body(&self, id: Option<i64>) -> Value {
        let mut body = json!({ "name": self.name.trim() });
        if let Some(fields) = body.as_object_mut() {
            if let Some(university_id) = self.university_id {
                fields.insert("universityId".into(), university_id.into());
            }
            if let Some(id) = id {
                fields.insert("id".into(), id.into());
            }
        }
        body
    }
}

/// Body for creating or renaming a university.
pub fn university_body(name: &str, id: Option<i64>) -> Value {
    match id {
        Some(id) => json!({ "id": id, "name": name.trim() }),
        None => json!({ "name": name.trim() }),
    }
}
