use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ids::next_record_id;

/// A program enrollment submitted through the registration form.
///
/// `program` and `tier` are free text captured at submission time, not
/// references into any other collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Opaque time-derived identifier
    pub id: String,

    /// Full name of the applicant
    pub name: String,

    pub email: String,

    pub phone: String,

    /// Selected membership tier (free text, e.g. "Premium")
    pub tier: String,

    /// Preferred start date as entered in the form
    pub start_date: String,

    /// Optional free-form fitness goals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,

    /// Title of the program enrolled into, denormalized at submission
    pub program: String,

    /// Creation timestamp
    pub timestamp: DateTime<Utc>,
}

impl Enrollment {
    /// Create a new Enrollment with a fresh id and timestamp.
    pub fn new(
        name: String,
        email: String,
        phone: String,
        tier: String,
        start_date: String,
        goals: Option<String>,
        program: String,
    ) -> Self {
        Self {
            id: next_record_id(),
            name,
            email,
            phone,
            tier,
            start_date,
            goals,
            program,
            timestamp: Utc::now(),
        }
    }
}
