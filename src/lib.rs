// src/lib.rs

//! Registrar API client library
//!
//! Typed access to a university academic-administration REST API:
//! courses, departments, degrees, tracks, intakes, students, registration
//! forms, colleges, universities and lookup lists. Every operation returns
//! an [`error::Outcome`]; failures carry localized, user-facing messages.

pub mod cascade;
pub mod client;
pub mod error;
pub mod mapping;
pub mod models;
pub mod registrar;
pub mod response;
pub mod services;
pub mod session;
pub mod transport;
pub mod utils;

pub use client::{ApiClient, ApiRequest};
pub use error::{ActionResult, AppError, Failure, FailureKind, Outcome, Reply};
pub use registrar::Registrar;
pub use session::Session;
