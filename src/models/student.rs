//! Student records and the registration payload.

use serde::Serialize;

use crate::mapping::{FromRaw, Keys, RawRecord};

mod keys {
    use super::Keys;

    pub const NATIONAL_ID: Keys = &["nationalId", "NationalId"];
    pub const FULL_NAME: Keys = &["fullName", "FullName"];
    pub const FIRST_NAME: Keys = &["firstName", "FirstName"];
    pub const SECOND_NAME: Keys = &["secondName", "SecondName"];
    pub const THIRD_NAME: Keys = &["thirdName", "ThirdName"];
    pub const EMAIL: Keys = &["email", "Email"];
    pub const PHONE: Keys = &["phone", "Phone"];
    pub const ADDRESS: Keys = &["address", "Address"];
    pub const NATIONALITY: Keys = &["nationality", "Nationality"];
    pub const MILITARY_SERVICE: Keys = &["militaryService", "MilitaryService"];
    pub const GRADE: Keys = &["grade", "Grade"];
    pub const MAJOR: Keys = &["major", "Major"];
    pub const GPA: Keys = &["gpa", "Gpa", "GPA"];
    pub const DATE_OF_BIRTH: Keys = &["dateOfBirth", "DateOfBirth"];
    pub const PLACE_OF_BIRTH: Keys = &["placeOfBirth", "PlaceOfBirth"];
    pub const PROFESSION: Keys = &["profession", "Profession"];
    pub const DATE_OF_ACCEPTANCE: Keys = &["dateOfAcceptance", "DateOfAcceptance"];
    pub const DEPARTMENT_NAME: Keys = &["departmentName", "DepartmentName"];
    pub const PROGRAM_NAME: Keys = &["programName", "ProgramName"];
    pub const COLLEGE_NAME: Keys = &["collegeName", "CollegeName"];
    pub const UNIVERSITY_NAME: Keys = &["universityName", "UniversityName"];
    pub const DEGREE_ID: Keys = &["degreeId", "DegreeId"];
    pub const DEGREE_NAME: Keys = &["degreeName", "DegreeName"];
    pub const MSAR_NAME: Keys = &["msarName", "MsarName"];
    pub const STEP: Keys = &["step", "Step"];
    pub const QUALIFICATIONS: Keys = &["qualifications", "Qualifications"];

    pub const QUALIFICATION: Keys = &["qualification", "Qualification"];
    pub const QUALIFICATION_NAME: Keys = &["qualificationName", "QualificationName"];
    pub const INSTITUTION: Keys = &["institution", "Institution"];
    pub const GRADE_NAME: Keys = &["gradeName", "GradeName"];
    pub const DATE_OBTAINED: Keys = &["dateObtained", "DateObtained"];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationDto {
    pub qualification: i64,
    pub qualification_name: String,
    pub institution: String,
    pub grade: f64,
    pub grade_name: String,
    pub date_obtained: String,
}

impl FromRaw for QualificationDto {
    fn from_raw(raw: &RawRecord<'_>) -> Self {
        Self {
            qualification: raw.integer(keys::QUALIFICATION),
            qualification_name: raw.text(keys::QUALIFICATION_NAME),
            institution: raw.text(keys::INSTITUTION),
            grade: raw.number(keys::GRADE),
            grade_name: raw.text(keys::GRADE_NAME),
            date_obtained: raw.text(keys::DATE_OBTAINED),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub national_id: String,
    pub full_name: String,
    pub first_name: String,
    pub second_name: String,
    pub third_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub nationality: String,
    pub military_service: String,
    pub grade: String,
    pub major: String,
    pub gpa: f64,
    pub date_of_birth: String,
    pub place_of_birth: String,
    pub profession: String,
    pub date_of_acceptance: String,
    pub department_name: String,
    pub program_name: String,
    pub college_name: String,
    pub university_name: String,
    pub degree_id: i64,
    pub degree_name: String,
    pub msar_name: String,
    pub step: i64,
    pub qualifications: Vec<QualificationDto>,
}

impl FromRaw for StudentDto {
    fn from_raw(raw: &RawRecord<'_>) -> Self {
        let first_name = raw.text(keys::FIRST_NAME);
        let second_name = raw.text(keys::SECOND_NAME);
        let third_name = raw.text(keys::THIRD_NAME);
        let full_name = match raw.text(keys::FULL_NAME) {
            name if !name.is_empty() => name,
            _ => [&first_name, &second_name, &third_name]
                .into_iter()
                .filter(|part| !part.is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join(" "),
        };

        Self {
            national_id: raw.id(keys::NATIONAL_ID),
            full_name,
            first_name,
            second_name,
            third_name,
            email: raw.text(keys::EMAIL),
            phone: raw.id(keys::PHONE),
            address: raw.text(keys::ADDRESS),
            nationality: raw.id(keys::NATIONALITY),
            military_service: raw.id(keys::MILITARY_SERVICE),
            grade: raw.id(keys::GRADE),
            major: raw.id(keys::MAJOR),
            gpa: raw.number(keys::GPA),
            date_of_birth: raw.text(keys::DATE_OF_BIRTH),
            place_of_birth: raw.text(keys::PLACE_OF_BIRTH),
            profession: raw.text(keys::PROFESSION),
            date_of_acceptance: raw.text(keys::DATE_OF_ACCEPTANCE),
            department_name: raw.text(keys::DEPARTMENT_NAME),
            program_name: raw.text(keys::PROGRAM_NAME),
            college_name: raw.text(keys::COLLEGE_NAME),
            university_name: raw.text(keys::UNIVERSITY_NAME),
            degree_id: raw.integer(keys::DEGREE_ID),
            degree_name: raw.text(keys::DEGREE_NAME),
            msar_name: raw.text(keys::MSAR_NAME),
            step: raw.integer(keys::STEP),
            qualifications: raw
                .records(keys::QUALIFICATIONS)
                .iter()
                .map(QualificationDto::from_raw)
                .collect(),
        }
    }
}

/// Filters for the student listing.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub department_id: Option<i64>,
    pub degree_id: Option<i64>,
    pub msar_id: Option<i64>,
    pub national_id: Option<String>,
}

impl StudentFilter {
    pub fn query(&self) -> Vec<(String, String)> {
        let ids = [
            ("deptId", self.department_id),
            ("degreeId", self.degree_id),
            ("msarId", self.msar_id),
        ];
        ids.into_iter()
            .filter_map(|(key, id)| id.map(|id| (key.to_string(), id.to_string())))
            .chain(
                self.national_id
                    .iter()
                    .filter(|nid| !nid.trim().is_empty())
                    .map(|nid| ("nationalId".to_string(), nid.trim().to_string())),
            )
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQualification {
    pub qualification: i64,
    pub institution: String,
    pub grade: i64,
    pub date_obtained: Option<String>,
}

impl NewQualification {
    fn is_complete(&self) -> bool {
        self.qualification != 0 && !self.institution.trim().is_empty()
    }
}

/// Registration payload for `POST /Student/add`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub national_id: String,
    pub first_name: String,
    pub second_name: String,
    pub third_name: String,
    pub email: String,
    pub nationality: i64,
    pub date_of_birth: String,
    pub place_of_birth: String,
    pub profession: String,
    pub phone: String,
    pub address: String,
    pub military_service: i64,
    pub gpa: f64,
    pub grade: i64,
    pub major: i64,
    pub notes: String,
    pub college_id: i64,
    pub university_id: i64,
    pub qualifications: Vec<NewQualification>,
}

impl NewStudent {
    /// Copy of the payload without incomplete qualification rows.
    pub fn cleaned(&self) -> Self {
        Self {
            qualifications: self
                .qualifications
                .iter()
                .filter(|q| q.is_complete())
                .cloned()
                .collect(),
            ..self.clone()
        }
    }
}
