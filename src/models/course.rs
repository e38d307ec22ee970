//! Course records and the inputs for creating or updating them.

use serde::Serialize;

use crate::mapping::{FromRaw, Keys, RawRecord};

mod keys {
    use super::Keys;

    pub const ID: Keys = &["id", "Id", "courseId", "CourseId"];
    pub const COURSE_ID: Keys = &["courseId", "CourseId", "id", "Id"];
    pub const CODE: Keys = &["code", "Code"];
    pub const NAME: Keys = &["name", "Name"];
    pub const CREDIT_HOURS: Keys = &["creditHours", "CreditHours"];
    pub const IS_OPTIONAL: Keys = &["isOptional", "IsOptional"];
    pub const SEMESTER: Keys = &["semester", "Semester"];
    pub const DEPARTMENT: Keys = &["departmentName", "DepartmentName"];
    pub const DEGREE: Keys = &["degreeName", "DegreeName"];
    pub const TRACK: Keys = &["msarName", "MsarName", "trackName", "TrackName"];
    pub const PREREQUISITES: Keys = &["prerequisites", "Prerequisites"];
    pub const DESCRIPTION: Keys = &["description", "Description"];
}

/// A course as listed by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: String,
    pub course_id: String,
    pub code: String,
    pub name: String,
    pub credit_hours: i64,
    pub is_optional: bool,
    pub semester: String,
    pub department: String,
    pub degree: String,
    /// Track (msar) name
    pub msar: String,
    /// Prerequisite course codes
    pub prerequisites: Vec<String>,
    pub description: String,
}

impl FromRaw for CourseDto {
    fn from_raw(raw: &RawRecord<'_>) -> Self {
        Self {
            id: raw.id(keys::ID),
            course_id: raw.id(keys::COURSE_ID),
            code: raw.text(keys::CODE),
            name: raw.text(keys::NAME),
            credit_hours: raw.integer(keys::CREDIT_HOURS),
            is_optional: raw.flag(keys::IS_OPTIONAL),
            semester: raw.id(keys::SEMESTER),
            department: raw.text(keys::DEPARTMENT),
            degree: raw.text(keys::DEGREE),
            msar: raw.text(keys::TRACK),
            prerequisites: raw.list(keys::PREREQUISITES),
            description: raw.text(keys::DESCRIPTION),
        }
    }
}

/// Filters for the course listing. Zero or absent ids are not sent.
#[derive(Debug, Clone, Copy, Default)]
pub struct CourseFilter {
    pub department_id: Option<i64>,
    pub degree_id: Option<i64>,
    pub msar_id: Option<i64>,
}

impl CourseFilter {
    pub fn query(&self) -> Vec<(String, String)> {
        [
            ("departmentId", self.department_id),
            ("degreeId", self.degree_id),
            ("msarId", self.msar_id),
        ]
        .into_iter()
        .filter_map(|(key, id)| id.filter(|id| *id != 0).map(|id| (key.to_string(), id.to_string())))
        .collect()
    }
}

/// Fields of a course submitted to the API.
#[derive(Debug, Clone, Default)]
pub struct CourseInput {
    pub code: String,
    pub name: String,
    pub credit_hours: u32,
    pub is_optional: bool,
    pub semester: u32,
    pub msar_id: i64,
    /// Prerequisite course ids, one form field each
    pub prerequisites: Vec<String>,
    pub description: Option<String>,
    /// Instructor national ids, one form field each
    pub instructors: Vec<String>,
}

impl CourseInput {
    /// Multipart fields in submission order. `id` is prepended for updates.
    pub fn form_fields(&self, id: Option<&str>) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = Vec::new();
        let mut push = |name: &str, value: String| fields.push((name.to_string(), value));

        if let Some(id) = id {
            push("Id", id.to_string());
        }
        push("Code", self.code.trim().to_string());
        push("Name", self.name.trim().to_string());
        push("CreditHours", self.credit_hours.to_string());
        push("IsOptional", self.is_optional.to_string());
        push("Semester", self.semester.to_string());
        push("MsarId", self.msar_id.to_string());
        push("Description", self.description.clone().unwrap_or_default());
        for prerequisite in &self.prerequisites {
            push("PrerequisiteCourseIds", prerequisite.clone());
        }
        for instructor in &self.instructors {
            push("InstructorNationalIds", instructor.clone());
        }
        fields
    }
}
