//! Registration forms and their approval workflow dates.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Value, json};

use crate::mapping::{FromRaw, Keys, RawRecord};
use crate::models::intake::date_only;

const ID: Keys = &["id", "Id"];
const STUDENT_NAME: Keys = &["studentName", "StudentName"];
const NATIONAL_ID: Keys = &["nationalId", "NationalId"];
const GENERAL_DEGREE: Keys = &["generalDegree", "GeneralDegree"];
const DEGREE_NAME: Keys = &["degreeName", "DegreeName"];
const FILE_NAME: Keys = &["fileNameText", "FileNameText", "fileName", "FileName"];
const DATA_FILL_DATE: Keys = &["dataFillDate", "DataFillDate"];
const DEPARTMENT_APPROVAL: Keys = &[
    "departmentCouncilApprovalDate",
    "DepartmentCouncilApprovalDate",
];
const COLLEGE_APPROVAL: Keys = &["collegeCouncilApprovalDate", "CollegeCouncilApprovalDate"];
const UNIVERSITY_APPROVAL: Keys = &[
    "universityVicePresidentApprovalDate",
    "UniversityVicePresidentApprovalDate",
];
const NOTES: Keys = &["notes", "Notes"];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFormDto {
    pub id: i64,
    pub student_name: String,
    pub national_id: String,
    pub general_degree: String,
    pub degree_name: String,
    pub file_name: String,
    pub data_fill_date: String,
    /// Approval dates, date-only; empty when not yet approved
    pub department_council_approval_date: String,
    pub college_council_approval_date: String,
    pub university_vice_president_approval_date: String,
    pub notes: String,
}

impl FromRaw for RegistrationFormDto {
    fn from_raw(raw: &RawRecord<'_>) -> Self {
        let date = |keys| date_only(&raw.text(keys)).to_string();
        Self {
            id: raw.integer(ID),
            student_name: raw.text(STUDENT_NAME),
            national_id: raw.id(NATIONAL_ID),
            general_degree: raw.id(GENERAL_DEGREE),
            degree_name: raw.text(DEGREE_NAME),
            file_name: raw.text(FILE_NAME),
            data_fill_date: raw.text(DATA_FILL_DATE),
            department_council_approval_date: date(DEPARTMENT_APPROVAL),
            college_council_approval_date: date(COLLEGE_APPROVAL),
            university_vice_president_approval_date: date(UNIVERSITY_APPROVAL),
            notes: raw.text(NOTES),
        }
    }
}

impl RegistrationFormDto {
    /// Whether all three councils have approved the form.
    pub fn is_fully_approved(&self) -> bool {
        [
            &self.department_council_approval_date,
            &self.college_council_approval_date,
            &self.university_vice_president_approval_date,
        ]
        .iter()
        .all(|date| !date.is_empty())
    }
}

/// Filters for the registration form listing.
#[derive(Debug, Clone, Default)]
pub struct FormFilter {
    pub department_id: Option<i64>,
    pub degree_id: Option<i64>,
    pub msar_id: Option<i64>,
    pub search: Option<String>,
}

impl FormFilter {
    pub fn query(&self) -> Vec<(String, String)> {
        let ids = [
            ("deptId", self.department_id),
            ("degreeId", self.degree_id),
            ("msarId", self.msar_id),
        ];
        ids.into_iter()
            .filter_map(|(key, id)| {
                id.filter(|id| *id != 0)
                    .map(|id| (key.to_string(), id.to_string()))
            })
            .chain(
                self.search
                    .iter()
                    .map(|term| term.trim())
                    .filter(|term| !term.is_empty())
                    .map(|term| ("search".to_string(), term.to_string())),
            )
            .collect()
    }
}

/// Council approval dates. Empty or absent dates are sent as `null`.
#[derive(Debug, Clone, Default)]
pub struct ApprovalDates {
    pub department_council: Option<String>,
    pub college_council: Option<String>,
    pub university_vice_president: Option<String>,
}

impl ApprovalDates {
    /// Request body for `PUT /RegistrationForms/{id}`.
    pub fn body(&self, id: i64, uploaded_at: DateTime<Utc>) -> Value {
        let date = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(|d| Value::String(d.to_string()))
                .unwrap_or(Value::Null)
        };
        json!({
            "id": id,
            "departmentCouncilApprovalDate": date(&self.department_council),
            "collegeCouncilApprovalDate": date(&self.college_council),
            "universityVicePresidentApprovalDate": date(&self.university_vice_president),
            "formImage": null,
            "fileUploadDate": uploaded_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}
