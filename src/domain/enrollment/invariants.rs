use super::entity::Enrollment;
use crate::domain::validation::{char_len, is_valid_email, ValidationErrors};
use crate::domain::DomainResult;

/// Validates all Enrollment invariants
/// Field rules mirror the registration form; every violated rule is
/// reported, addressed by the field's wire name.
pub fn validate_enrollment(enrollment: &Enrollment) -> DomainResult<()> {
    let mut errors = ValidationErrors::new();

    if char_len(&enrollment.name) < 2 {
        errors.push("name", "Name must be at least 2 characters");
    } else if char_len(&enrollment.name) > 100 {
        errors.push("name", "Name must be at most 100 characters");
    }

    if !is_valid_email(&enrollment.email) {
        errors.push("email", "Invalid email address");
    } else if char_len(&enrollment.email) > 255 {
        errors.push("email", "Email must be at most 255 characters");
    }

    if char_len(&enrollment.phone) < 10 {
        errors.push("phone", "Phone must be at least 10 digits");
    } else if char_len(&enrollment.phone) > 20 {
        errors.push("phone", "Phone must be at most 20 characters");
    }

    if enrollment.tier.is_empty() {
        errors.push("selectedTier", "Please select a membership tier");
    }

    if enrollment.start_date.is_empty() {
        errors.push("preferredStartDate", "Please select a start date");
    }

    if let Some(goals) = &enrollment.goals {
        if char_len(goals) > 500 {
            errors.push("goals", "Goals must be less than 500 characters");
        }
    }

    errors.into_result()
}

/// Invariants that must hold for the Enrollment domain:
///
/// 1. Identity (time-derived id) is immutable
/// 2. Name is 2..=100 characters
/// 3. Email has a valid shape and is at most 255 characters
/// 4. Phone is 10..=20 characters
/// 5. Tier and start date are never empty
/// 6. Goals, when present, stay under 500 characters
/// 7. Program title is a denormalized copy, never resolved elsewhere
/// 8. Creation timestamp never changes
