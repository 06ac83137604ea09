use serde::{Deserialize, Serialize};

use crate::domain::ids::next_record_id;

/// A community weekend running event.
///
/// Date, time and distance are display strings exactly as entered by the
/// admin ("Saturday, Dec 7", "6:30 AM", "5K"), not parsed calendar values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekendRun {
    /// Opaque time-derived identifier
    pub id: String,

    pub date: String,

    pub time: String,

    pub location: String,

    pub distance: String,

    /// Manually maintained headcount shown on the event card. Independent
    /// of the registration collection; editing one never touches the other.
    pub participants: u32,
}

impl WeekendRun {
    /// Create a new WeekendRun with a fresh id.
    pub fn new(
        date: String,
        time: String,
        location: String,
        distance: String,
        participants: u32,
    ) -> Self {
        Self {
            id: next_record_id(),
            date,
            time,
            location,
            distance,
            participants,
        }
    }

    /// The fixed schedule persisted the first time an empty store is
    /// initialized. Ids "1".."3" predate time-derived generation and are
    /// kept stable so existing registrations keep resolving.
    pub fn default_schedule() -> Vec<WeekendRun> {
        vec![
            WeekendRun {
                id: "1".to_string(),
                date: "Saturday, Dec 7".to_string(),
                time: "6:30 AM".to_string(),
                location: "Trinity Bellwoods Park".to_string(),
                distance: "5K".to_string(),
                participants: 24,
            },
            WeekendRun {
                id: "2".to_string(),
                date: "Saturday, Dec 14".to_string(),
                time: "6:30 AM".to_string(),
                location: "High Park".to_string(),
                distance: "10K".to_string(),
                participants: 18,
            },
            WeekendRun {
                id: "3".to_string(),
                date: "Saturday, Dec 21".to_string(),
                time: "7:00 AM".to_string(),
                location: "Waterfront Trail".to_string(),
                distance: "8K".to_string(),
                participants: 15,
            },
        ]
    }
}
