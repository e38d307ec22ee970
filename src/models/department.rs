//! Department records.

use serde::Serialize;
use serde_json::{Value, json};

use crate::mapping::{FromRaw, Keys, RawRecord};

const ID: Keys = &["id", "Id"];
const CODE: Keys = &["code", "Code"];
const NAME: Keys = &["name", "Name"];
const DESCRIPTION: Keys = &["description", "Description"];
const PROGRAM_ID: Keys = &["programId", "ProgramId", "program.id", "Program.Id"];
const PROGRAM_NAME: Keys = &["programName", "ProgramName", "program.name", "Program.Name"];

/// Minimum length of a department code after trimming.
pub const MIN_CODE_LEN: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub description: String,
    pub program_id: i64,
    pub program_name: String,
}

impl FromRaw for DepartmentDto {
    fn from_raw(raw: &RawRecord<'_>) -> Self {
        Self {
            id: raw.integer(ID),
            code: raw.text(CODE),
            name: raw.text(NAME),
            description: raw.text(DESCRIPTION),
            program_id: raw.integer(PROGRAM_ID),
            program_name: raw.text(PROGRAM_NAME),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DepartmentInput {
    pub code: String,
    pub name: String,
    pub description: String,
    pub program_id: i64,
}

impl DepartmentInput {
    /// Whether the trimmed code is long enough to submit.
    pub fn has_valid_code(&self) -> bool {
        self.code.trim().chars().count() >= MIN_CODE_LEN
    }

    /// Request body; `id` is included for updates.
    pub fn body(&self, id: Option<i64>) -> Value {
        let mut body = json!({
            "code": self.code.trim(),
            "name": self.name.trim(),
            "description": self.description.trim(),
            "programId": self.program_id,
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
    fn test_code_length_counts_trimmed_chars() {
        let mut input = DepartmentInput {
            code: " C ".into(),
            ..Default::default()
        };
        assert!(!input.has_valid_code());
        input.code = "قس".into();
        assert!(input.has_valid_code());
    }

    #[test]
    fn test_body_is_camel_case() {
        let input = DepartmentInput {
            code: "CS".into(),
            name: " Computer Science ".into(),
            description: String::new(),
            program_id: 3,
        };
        assert_eq!(
            input.body(Some(8)),
            json!({"id": 8, "code": "CS", "name": "Computer Science", "description": "", "programId": 3})
        );
        assert!(input.body(None).get("id").is_none());
    }

    #[test]
    fn test_maps_nested_program() {
        let dept = DepartmentDto::from_value(&json!({
            "Id": "4",
            "Code": "MA",
            "program": {"id": 2, "name": "Bachelor"}
        }));
        assert_eq!(dept.id, 4);
        assert_eq!(dept.program_id, 2);
        assert_eq!(dept.program_name, "Bachelor");
    }
}
