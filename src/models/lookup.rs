//! Lookup lists (`{id, value}` pairs) backing dropdowns.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::mapping::{FromRaw, Keys, RawRecord};

const ID: Keys = &["id", "Id"];
const VALUE: Keys = &["value", "Value", "name", "Name"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupItem {
    pub id: i64,
    pub value: String,
}

impl LookupItem {
    pub fn new(id: i64, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

impl FromRaw for LookupItem {
    fn from_raw(raw: &RawRecord<'_>) -> Self {
        Self {
            id: raw.integer(ID),
            value: raw.text(VALUE),
        }
    }
}

/// Lookup lists served under `/Lookups/{name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Nationalities,
    Majors,
    Colleges,
    Grades,
    Qualifications,
    MilitaryServices,
    Universities,
    Degrees,
    Departments,
    GeneralDegrees,
    Programs,
    Statuses,
}

impl LookupKind {
    pub const ALL: [LookupKind; 12] = [
        Self::Nationalities,
        Self::Majors,
        Self::Colleges,
        Self::Grades,
        Self::Qualifications,
        Self::MilitaryServices,
        Self::Universities,
        Self::Degrees,
        Self::Departments,
        Self::GeneralDegrees,
        Self::Programs,
        Self::Statuses,
    ];

    /// Path segment after `/Lookups/`. The backend's casing is not uniform.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Nationalities => "nationalities",
            Self::Majors => "majors",
            Self::Colleges => "colleges",
            Self::Grades => "grades",
            Self::Qualifications => "Qualifications",
            Self::MilitaryServices => "militaryServices",
            Self::Universities => "universities",
            Self::Degrees => "degrees",
            Self::Departments => "departments",
            Self::GeneralDegrees => "GeneralDegree",
            Self::Programs => "Programs",
            Self::Statuses => "statuses",
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for LookupKind {
    type Err = String;

    /// Case-insensitive; accepts the path segment or a kebab/snake variant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| {
                let segment = kind.path_segment().to_lowercase();
                segment == wanted || format!("{segment}s") == wanted
            })
            .ok_or_else(|| format!("unknown lookup kind: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_value_falls_back_to_name() {
        let item = LookupItem::from_value(&json!({"Id": "3", "Name": "Computer Science"}));
        assert_eq!(item, LookupItem::new(3, "Computer Science"));
        let item = LookupItem::from_value(&json!({"id": 1, "value": "Egyptian", "name": "x"}));
        assert_eq!(item.value, "Egyptian");
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("military-services".parse(), Ok(LookupKind::MilitaryServices));
        assert_eq!("general_degree".parse(), Ok(LookupKind::GeneralDegrees));
        assert_eq!("Programs".parse(), Ok(LookupKind::Programs));
        assert!("nope".parse::<LookupKind>().is_err());
    }
}
