//! Entity and action tags used to pick messages and failure mappings.

/// A remote entity type managed through the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Course,
    Department,
    Degree,
    Track,
    Intake,
    Student,
    RegistrationForm,
    College,
    University,
    Lookup,
}

impl Entity {
    /// Display label used inside user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Course => "المقرر",
            Self::Department => "القسم",
            Self::Degree => "الدرجة العلمية",
            Self::Track => "المسار",
            Self::Intake => "العام الدراسي",
            Self::Student => "الطالب",
            Self::RegistrationForm => "استمارة التسجيل",
            Self::College => "الكلية",
            Self::University => "الجامعة",
            Self::Lookup => "البيانات",
        }
    }

    /// Whether the backend answers HTTP 500 when deleting a referenced
    /// record of this type.
    pub fn rejects_referenced_delete(self) -> bool {
        matches!(
            self,
            Self::Department | Self::Degree | Self::Track | Self::Intake
        )
    }
}

/// The kind of operation a service call performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Create,
    Update,
    Delete,
}
