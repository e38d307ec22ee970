// src/models/mod.rs

//! Domain models for the registrar client.
//!
//! Each entity module holds the DTO the API returns (mapped through
//! [`FromRaw`](crate::mapping::FromRaw)), the filters its listing accepts
//! and the input it submits.

mod config;
mod course;
mod degree;
mod department;
mod entity;
mod institution;
mod intake;
mod locale;
mod lookup;
mod registration;
mod student;
mod track;

// Re-export all public types
pub use config::{ApiConfig, BASE_URL_ENV, CacheConfig, Config, LoggingConfig};
pub use course::{CourseDto, CourseFilter, CourseInput};
pub use degree::{DegreeDto, DegreeInput};
pub use department::{DepartmentDto, DepartmentInput, MIN_CODE_LEN};
pub use entity::{Action, Entity};
pub use institution::{CollegeDto, CollegeInput, UniversityDto, university_body};
pub use intake::{IntakeDto, IntakeUpdate, NewIntake, date_only};
pub use locale::{LocaleConfig, Messages};
pub use lookup::{LookupItem, LookupKind};
pub use registration::{ApprovalDates, FormFilter, RegistrationFormDto};
pub use student::{NewQualification, NewStudent, QualificationDto, StudentDto, StudentFilter};
pub use track::{TrackDto, TrackInput};
