// src/repositories/enrollment_repository.rs
//
// Program enrollment persistence

use log::debug;
use std::sync::Arc;

use crate::domain::enrollment::Enrollment;
use crate::error::{AppError, AppResult};
use crate::storage::{keys, StorageGateway};

#[cfg_attr(test, mockall::automock)]
pub trait EnrollmentRepository: Send + Sync {
    /// Full collection in stored (append) order; empty when nothing stored.
    fn list(&self) -> AppResult<Vec<Enrollment>>;
    fn add(&self, enrollment: &Enrollment) -> AppResult<()>;
    /// Replaces the record with the matching id. Silent no-op if absent.
    fn update(&self, enrollment: &Enrollment) -> AppResult<()>;
    fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct StoredEnrollmentRepository {
    storage: Arc<dyn StorageGateway>,
}

impl StoredEnrollmentRepository {
    pub fn new(storage: Arc<dyn StorageGateway>) -> Self {
        Self { storage }
    }

    fn load(&self) -> AppResult<Vec<Enrollment>> {
        match self.storage.read(keys::PROGRAM_ENROLLMENTS)? {
            Some(text) => serde_json::from_str(&text).map_err(|source| AppError::Corrupt {
                key: keys::PROGRAM_ENROLLMENTS.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, enrollments: &[Enrollment]) -> AppResult<()> {
        let text = serde_json::to_string(enrollments)?;
        self.storage.write(keys::PROGRAM_ENROLLMENTS, &text)
    }
}

impl EnrollmentRepository for StoredEnrollmentRepository {
    fn list(&self) -> AppResult<Vec<Enrollment>> {
        self.load()
    }

    fn add(&self, enrollment: &Enrollment) -> AppResult<()> {
        let mut enrollments = self.load()?;
        enrollments.push(enrollment.clone());
        self.persist(&enrollments)?;
        debug!("enrollment {} appended", enrollment.id);
        Ok(())
    }

    fn update(&self, enrollment: &Enrollment) -> AppResult<()> {
        let mut enrollments = self.load()?;
        if let Some(slot) = enrollments.iter_mut().find(|e| e.id == enrollment.id) {
            *slot = enrollment.clone();
            self.persist(&enrollments)?;
            debug!("enrollment {} replaced", enrollment.id);
        }
        Ok(())
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        let mut enrollments = self.load()?;
        enrollments.retain(|e| e.id != id);
        self.persist(&enrollments)?;
        debug!("enrollment {} removed", id);
        Ok(())
    }
}
