//! Intakes (academic years).

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::mapping::{FromRaw, Keys, RawRecord};

const ID: Keys = &["id", "Id"];
const NAME: Keys = &["name", "Name"];
const START_DATE: Keys = &["startDate", "StartDate"];
const END_DATE: Keys = &["endDate", "EndDate"];
const ACADEMIC_YEAR: Keys = &["academicYear", "AcademicYear"];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeDto {
    pub id: i64,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub academic_year: String,
}

impl FromRaw for IntakeDto {
    fn from_raw(raw: &RawRecord<'_>) -> Self {
        Self {
            id: raw.integer(ID),
            name: raw.text(NAME),
            start_date: raw.text(START_DATE),
            end_date: raw.text(END_DATE),
            academic_year: raw.id(ACADEMIC_YEAR),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIntake {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

/// Partial update; absent fields are left out of the request.
#[derive(Debug, Clone, Default)]
pub struct IntakeUpdate {
    pub id: i64,
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl IntakeUpdate {
    /// Body with date-only values and the academic year derived from the
    /// start date.
    pub fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("id".into(), json!(self.id));
        if let Some(name) = &self.name {
            body.insert("name".into(), json!(name));
        }
        if let Some(start) = &self.start_date {
            body.insert("startDate".into(), json!(date_only(start)));
            if let Some(year) = year_of(start) {
                body.insert("academicYear".into(), json!(year.to_string()));
            }
        }
        if let Some(end) = &self.end_date {
            body.insert("endDate".into(), json!(date_only(end)));
        }
        Value::Object(body)
    }
}

/// Date part of an ISO timestamp (`2024-09-01T00:00:00` → `2024-09-01`).
pub fn date_only(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

fn year_of(value: &str) -> Option<i32> {
    NaiveDate::parse_from_str(date_only(value), "%Y-%m-%d")
        .ok()
        .map(|date| date.year())
}
