// src/services/mod.rs

//! Service layer: one service per remote entity.
//!
//! - Courses (`CourseService`)
//! - Departments (`DepartmentService`)
//! - Degrees (`DegreeService`)
//! - Tracks (`TrackService`)
//! - Intakes (`IntakeService`)
//! - Students (`StudentService`)
//! - Registration forms (`RegistrationFormService`)
//! - Colleges and universities (`CollegeService`, `UniversityService`)
//! - Lookup lists (`LookupService`), cached
//!
//! Services that change data behind a cached lookup list invalidate the
//! affected keys after a successful call.

mod courses;
mod degrees;
mod departments;
mod institutions;
mod intakes;
mod lookups;
mod registration_forms;
mod students;
mod tracks;

pub use courses::CourseService;
pub use degrees::DegreeService;
pub use departments::DepartmentService;
pub use institutions::{CollegeService, UniversityService};
pub use intakes::IntakeService;
pub use lookups::{LookupKey, LookupService, SharedLookupCache};
pub use registration_forms::RegistrationFormService;
pub use students::StudentService;
pub use tracks::TrackService;
