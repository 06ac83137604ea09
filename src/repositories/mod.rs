// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Explicit read-modify-write of one whole collection per operation

pub mod enrollment_repository;
pub mod run_registration_repository;
pub mod weekend_run_repository;

pub use enrollment_repository::{EnrollmentRepository, StoredEnrollmentRepository};
pub use run_registration_repository::{RunRegistrationRepository, StoredRunRegistrationRepository};
pub use weekend_run_repository::{StoredWeekendRunRepository, WeekendRunRepository};

#[cfg(test)]
pub use enrollment_repository::MockEnrollmentRepository;
#[cfg(test)]
pub use run_registration_repository::MockRunRegistrationRepository;
#[cfg(test)]
pub use weekend_run_repository::MockWeekendRunRepository;
