use super::entity::WeekendRun;
use crate::domain::validation::ValidationErrors;
use crate::domain::DomainResult;

/// Validates all WeekendRun invariants
/// The admin dialog requires every descriptive field; participants is
/// already constrained by its type.
pub fn validate_weekend_run(run: &WeekendRun) -> DomainResult<()> {
    let mut errors = ValidationErrors::new();

    if run.date.trim().is_empty() {
        errors.push("date", "Date is required");
    }
    if run.time.trim().is_empty() {
        errors.push("time", "Time is required");
    }
    if run.location.trim().is_empty() {
        errors.push("location", "Location is required");
    }
    if run.distance.trim().is_empty() {
        errors.push("distance", "Distance is required");
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_run() {
        let run = WeekendRun::new(
            "Saturday, Jan 4".to_string(),
            "7:00 AM".to_string(),
            "Cherry Beach".to_string(),
            "5K".to_string(),
            0,
        );
        assert!(validate_weekend_run(&run).is_ok());
    }

    #[test]
    fn test_blank_fields_fail() {
        let mut run = WeekendRun::new(
            "   ".to_string(),
            String::new(),
            "Cherry Beach".to_string(),
            "5K".to_string(),
            0,
        );
        assert!(validate_weekend_run(&run).is_err());
        run.date = "Saturday, Jan 4".to_string();
        run.time = "7:00 AM".to_string();
        assert!(validate_weekend_run(&run).is_ok());
    }

    #[test]
    fn test_default_schedule_is_three_valid_runs() {
        let schedule = WeekendRun::default_schedule();
        assert_eq!(schedule.len(), 3);
        for run in &schedule {
            assert!(validate_weekend_run(run).is_ok());
        }
        assert_eq!(schedule[0].id, "1");
        assert_eq!(schedule[1].location, "High Park");
        assert_eq!(schedule[2].participants, 15);
    }
}
