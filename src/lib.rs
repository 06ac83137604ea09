// TenX Hub - Local-first enrollment and weekend-run data layer
//
// Architecture:
// - Domain-centric: entities and their invariants live in `domain`
// - Explicit persistence: one StorageGateway abstraction, typed decode on read
// - Repositories: dumb read-modify-write mappers over whole collections
// - Services: form validation, record construction, admin grouping
// - Local-first: everything lives in one key/value store, last writer wins

// ============================================================================
// MODULES
// ============================================================================

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;
pub mod storage;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    next_record_id,
    validate_enrollment,
    validate_registration,
    validate_weekend_run,
    DomainError,
    // Enrollment
    Enrollment,
    ExperienceLevel,
    FieldError,
    // Run Registration
    RunRegistration,
    RunSnapshot,
    ValidationErrors,
    // Weekend Run
    WeekendRun,
};

// ============================================================================
// PUBLIC API - Persistence
// ============================================================================

pub use error::{AppError, AppResult};

pub use storage::{keys, FileStorage, MemoryStorage, StorageGateway};

pub use repositories::{
    EnrollmentRepository, RunRegistrationRepository, StoredEnrollmentRepository,
    StoredRunRegistrationRepository, StoredWeekendRunRepository, WeekendRunRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    EnrollProgramRequest, EnrollmentService, RunDraft, RunRegistrationRequest,
    RunRegistrationService, SessionService, WeekendRunService,
};
