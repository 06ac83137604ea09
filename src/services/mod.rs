// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Services own form validation, record construction and admin grouping.
// Repositories are injected, so every service runs unchanged against the
// file-backed gateway or the in-memory one.

pub mod enrollment_service;
pub mod run_registration_service;
pub mod session_service;
pub mod weekend_run_service;


// Re-export all services and their types
pub use enrollment_service::{EnrollProgramRequest, EnrollmentService};

pub use weekend_run_service::{RunDraft, WeekendRunService};

pub use run_registration_service::{RunRegistrationRequest, RunRegistrationService};

pub use session_service::SessionService;
