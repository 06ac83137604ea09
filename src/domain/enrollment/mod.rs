pub mod entity;
pub mod invariants;

pub use entity::Enrollment;
pub use invariants::validate_enrollment;
