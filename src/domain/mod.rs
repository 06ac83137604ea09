// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod enrollment;
pub mod ids;
pub mod run_registration;
pub mod validation;
pub mod weekend_run;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Enrollment Domain
pub use enrollment::{validate_enrollment, Enrollment};

// Weekend Run Domain
pub use weekend_run::{validate_weekend_run, WeekendRun};

// Run Registration Domain
pub use run_registration::{
    validate_registration, ExperienceLevel, RunRegistration, RunSnapshot,
};

// Record identifiers
pub use ids::next_record_id;

// Field-level validation
pub use validation::{FieldError, ValidationErrors};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
