use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ids::next_record_id;
use crate::domain::weekend_run::WeekendRun;
use crate::domain::DomainError;

/// A registration for one weekend run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRegistration {
    /// Opaque time-derived identifier
    pub id: String,

    pub name: String,

    pub email: String,

    pub phone: String,

    /// Name and phone number of an emergency contact
    pub emergency_contact: String,

    pub experience_level: ExperienceLevel,

    /// Id of the run registered for. Never enforced against the run
    /// collection; the run may be deleted afterwards.
    pub run_id: String,

    /// Snapshot of the run at registration time. Kept for display even when
    /// the referenced run is later edited or deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_details: Option<RunSnapshot>,

    /// Creation timestamp
    pub timestamp: DateTime<Utc>,
}

/// Denormalized copy of a run's display fields, frozen at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSnapshot {
    pub date: String,
    pub time: String,
    pub location: String,
    pub distance: String,
}

/// Self-reported running experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl RunRegistration {
    /// Create a new RunRegistration with a fresh id and timestamp, freezing
    /// a snapshot of the target run.
    pub fn new(
        name: String,
        email: String,
        phone: String,
        emergency_contact: String,
        experience_level: ExperienceLevel,
        run: &WeekendRun,
    ) -> Self {
        Self {
            id: next_record_id(),
            name,
            email,
            phone,
            emergency_contact,
            experience_level,
            run_id: run.id.clone(),
            run_details: Some(RunSnapshot::from(run)),
            timestamp: Utc::now(),
        }
    }
}

impl From<&WeekendRun> for RunSnapshot {
    fn from(run: &WeekendRun) -> Self {
        Self {
            date: run.date.clone(),
            time: run.time.clone(),
            location: run.location.clone(),
            distance: run.distance.clone(),
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperienceLevel::Beginner => write!(f, "beginner"),
            ExperienceLevel::Intermediate => write!(f, "intermediate"),
            ExperienceLevel::Advanced => write!(f, "advanced"),
        }
    }
}

impl std::str::FromStr for ExperienceLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            other => Err(DomainError::InvariantViolation(format!(
                "Unknown experience level: {other}"
            ))),
        }
    }
}
