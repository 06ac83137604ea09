// src/services/weekend_run_service.rs
use log::info;
use std::sync::Arc;

use crate::domain::weekend_run::{validate_weekend_run, WeekendRun};
use crate::error::{AppError, AppResult};
use crate::repositories::WeekendRunRepository;

/// Admin "add run" form contents: everything but the id, which is
/// generated on create.
#[derive(Debug, Clone)]
pub struct RunDraft {
    pub date: String,
    pub time: String,
    pub location: String,
    pub distance: String,
    pub participants: u32,
}

pub struct WeekendRunService {
    run_repo: Arc<dyn WeekendRunRepository>,
}

impl WeekendRunService {
    pub fn new(run_repo: Arc<dyn WeekendRunRepository>) -> Self {
        Self { run_repo }
    }

    /// Explicit first-use initialization: persist the default schedule when
    /// the store has never held run data.
    pub fn ensure_seeded(&self) -> AppResult<()> {
        self.run_repo.ensure_seeded()
    }

    pub fn list_runs(&self) -> AppResult<Vec<WeekendRun>> {
        self.run_repo.list()
    }

    /// Lookup for the registration page; an absent id is the deleted-run
    /// case and surfaces as NotFound for the caller's fallback view.
    pub fn get_run(&self, id: &str) -> AppResult<WeekendRun> {
        self.run_repo.get(id)?.ok_or(AppError::NotFound)
    }

    /// First event in stored order, shown by the home-page popup.
    pub fn next_run(&self) -> AppResult<Option<WeekendRun>> {
        Ok(self.run_repo.list()?.into_iter().next())
    }

    pub fn create_run(&self, draft: RunDraft) -> AppResult<WeekendRun> {
        let run = WeekendRun::new(
            draft.date,
            draft.time,
            draft.location,
            draft.distance,
            draft.participants,
        );
        validate_weekend_run(&run).map_err(AppError::Domain)?;
        self.run_repo.add(&run)?;
        info!("weekend run {} created", run.id);
        Ok(run)
    }

    /// Admin edit: full replacement of the field set under the same id.
    pub fn update_run(&self, run: WeekendRun) -> AppResult<()> {
        validate_weekend_run(&run).map_err(AppError::Domain)?;
        self.run_repo.update(&run)?;
        info!("weekend run {} updated", run.id);
        Ok(())
    }

    pub fn delete_run(&self, id: &str) -> AppResult<()> {
        self.run_repo.delete(id)?;
        info!("weekend run {} deleted", id);
        Ok(())
    }
}
