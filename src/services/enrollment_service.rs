// src/services/enrollment_service.rs
use log::info;
use std::sync::Arc;

use crate::domain::enrollment::{validate_enrollment, Enrollment};
use crate::error::{AppError, AppResult};
use crate::repositories::EnrollmentRepository;

/// One submission of the program registration form. Field names follow the
/// form; `selected_tier` and `preferred_start_date` land in the stored
/// record as `tier` and `startDate`.
#[derive(Debug, Clone)]
pub struct EnrollProgramRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub selected_tier: String,
    pub preferred_start_date: String,
    pub goals: Option<String>,
    /// Title of the program the form was opened for
    pub program_title: String,
}

pub struct EnrollmentService {
    enrollment_repo: Arc<dyn EnrollmentRepository>,
}

impl EnrollmentService {
    pub fn new(enrollment_repo: Arc<dyn EnrollmentRepository>) -> Self {
        Self { enrollment_repo }
    }

    /// Validate the form and append one enrollment record. On validation
    /// failure nothing is stored and the error carries per-field messages.
    pub fn submit_enrollment(&self, request: EnrollProgramRequest) -> AppResult<Enrollment> {
        let enrollment = Enrollment::new(
            request.name,
            request.email,
            request.phone,
            request.selected_tier,
            request.preferred_start_date,
            request.goals.filter(|g| !g.trim().is_empty()),
            request.program_title,
        );

        validate_enrollment(&enrollment).map_err(AppError::Domain)?;
        self.enrollment_repo.add(&enrollment)?;

        info!(
            "enrollment {} recorded for program '{}'",
            enrollment.id, enrollment.program
        );
        Ok(enrollment)
    }

    pub fn list_enrollments(&self) -> AppResult<Vec<Enrollment>> {
        self.enrollment_repo.list()
    }

    pub fn delete_enrollment(&self, id: &str) -> AppResult<()> {
        self.enrollment_repo.delete(id)
    }

    /// Enrollments partitioned by program title for the admin view, groups
    /// in first-seen order. Recomputed on every call, never persisted.
    pub fn enrollments_by_program(&self) -> AppResult<Vec<(String, Vec<Enrollment>)>> {
        let mut groups: Vec<(String, Vec<Enrollment>)> = Vec::new();
        for enrollment in self.enrollment_repo.list()? {
            match groups.iter_mut().find(|g| g.0 == enrollment.program) {
                Some((_, members)) => members.push(enrollment),
                None => groups.push((enrollment.program.clone(), vec![enrollment])),
            }
        }
        Ok(groups)
    }
}
