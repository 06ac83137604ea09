pub mod entity;
pub mod invariants;

pub use entity::WeekendRun;
pub use invariants::validate_weekend_run;
