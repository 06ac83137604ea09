pub mod entity;
pub mod invariants;

pub use entity::{ExperienceLevel, RunRegistration, RunSnapshot};
pub use invariants::validate_registration;
