use super::entity::RunRegistration;
use crate::domain::validation::{char_len, is_valid_email, ValidationErrors};
use crate::domain::DomainResult;

/// Validates all RunRegistration invariants
/// Field rules mirror the weekend run registration form.
pub fn validate_registration(registration: &RunRegistration) -> DomainResult<()> {
    let mut errors = ValidationErrors::new();

    if char_len(&registration.name) < 2 {
        errors.push("name", "Name must be at least 2 characters");
    } else if char_len(&registration.name) > 100 {
        errors.push("name", "Name must be at most 100 characters");
    }

    if !is_valid_email(&registration.email) {
        errors.push("email", "Invalid email address");
    } else if char_len(&registration.email) > 255 {
        errors.push("email", "Email must be at most 255 characters");
    }

    if char_len(&registration.phone) < 10 {
        errors.push("phone", "Phone must be at least 10 digits");
    } else if char_len(&registration.phone) > 20 {
        errors.push("phone", "Phone must be at most 20 characters");
    }

    if char_len(&registration.emergency_contact) < 10 {
        errors.push(
            "emergencyContact",
            "Emergency contact must be at least 10 characters",
        );
    } else if char_len(&registration.emergency_contact) > 100 {
        errors.push(
            "emergencyContact",
            "Emergency contact must be at most 100 characters",
        );
    }

    errors.into_result()
}
