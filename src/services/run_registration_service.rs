// src/services/run_registration_service.rs
use log::info;
use std::sync::Arc;

use crate::domain::run_registration::{
    validate_registration, ExperienceLevel, RunRegistration,
};
use crate::error::{AppError, AppResult};
use crate::repositories::{RunRegistrationRepository, WeekendRunRepository};

/// One submission of the weekend run registration form.
#[derive(Debug, Clone)]
pub struct RunRegistrationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub emergency_contact: String,
    pub experience_level: ExperienceLevel,
    pub run_id: String,
}

pub struct RunRegistrationService {
    registration_repo: Arc<dyn RunRegistrationRepository>,
    run_repo: Arc<dyn WeekendRunRepository>,
}

impl RunRegistrationService {
    pub fn new(
        registration_repo: Arc<dyn RunRegistrationRepository>,
        run_repo: Arc<dyn WeekendRunRepository>,
    ) -> Self {
        Self {
            registration_repo,
            run_repo,
        }
    }

    /// Register for a run. The target run must still exist (NotFound is the
    /// deleted-run fallback); its display fields are frozen into the record
    /// so the registration stays renderable if the run changes later.
    pub fn register(&self, request: RunRegistrationRequest) -> AppResult<RunRegistration> {
        let run = self.run_repo.get(&request.run_id)?.ok_or(AppError::NotFound)?;

        let registration = RunRegistration::new(
            request.name,
            request.email,
            request.phone,
            request.emergency_contact,
            request.experience_level,
            &run,
        );

        validate_registration(&registration).map_err(AppError::Domain)?;
        self.registration_repo.add(&registration)?;

        info!(
            "registration {} recorded for run {} ({} on {})",
            registration.id, run.id, run.distance, run.date
        );
        Ok(registration)
    }

    pub fn list_registrations(&self) -> AppResult<Vec<RunRegistration>> {
        self.registration_repo.list()
    }

    pub fn delete_registration(&self, id: &str) -> AppResult<()> {
        self.registration_repo.delete(id)
    }

    /// Registrations partitioned for the admin view, keyed by the snapshot
    /// as "{distance} - {date}", with "Unknown Run" for records that carry
    /// no snapshot. Groups come out in first-seen order.
    pub fn registrations_by_run(&self) -> AppResult<Vec<(String, Vec<RunRegistration>)>> {
        let mut groups: Vec<(String, Vec<RunRegistration>)> = Vec::new();
        for registration in self.registration_repo.list()? {
            let key = match &registration.run_details {
                Some(details) => format!("{} - {}", details.distance, details.date),
                None => "Unknown Run".to_string(),
            };
            match groups.iter_mut().find(|g| g.0 == key) {
                Some((_, members)) => members.push(registration),
                None => groups.push((key, vec![registration])),
            }
        }
        Ok(groups)
    }
}
