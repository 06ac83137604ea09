// src/repositories/run_registration_repository.rs
//
// Weekend run registration persistence

use log::debug;
use std::sync::Arc;

use crate::domain::run_registration::RunRegistration;
use crate::error::{AppError, AppResult};
use crate::storage::{keys, StorageGateway};

#[cfg_attr(test, mockall::automock)]
pub trait RunRegistrationRepository: Send + Sync {
    fn list(&self) -> AppResult<Vec<RunRegistration>>;
    fn add(&self, registration: &RunRegistration) -> AppResult<()>;
    /// Replaces the record with the matching id. Silent no-op if absent.
    fn update(&self, registration: &RunRegistration) -> AppResult<()>;
    fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct StoredRunRegistrationRepository {
    storage: Arc<dyn StorageGateway>,
}

impl StoredRunRegistrationRepository {
    pub fn new(storage: Arc<dyn StorageGateway>) -> Self {
        Self { storage }
    }

    fn load(&self) -> AppResult<Vec<RunRegistration>> {
        match self.storage.read(keys::WEEKEND_RUN_REGISTRATIONS)? {
            Some(text) => serde_json::from_str(&text).map_err(|source| AppError::Corrupt {
                key: keys::WEEKEND_RUN_REGISTRATIONS.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, registrations: &[RunRegistration]) -> AppResult<()> {
        let text = serde_json::to_string(registrations)?;
        self.storage.write(keys::WEEKEND_RUN_REGISTRATIONS, &text)
    }
}

impl RunRegistrationRepository for StoredRunRegistrationRepository {
    fn list(&self) -> AppResult<Vec<RunRegistration>> {
        self.load()
    }

    fn add(&self, registration: &RunRegistration) -> AppResult<()> {
        let mut registrations = self.load()?;
        registrations.push(registration.clone());
        self.persist(&registrations)?;
        debug!("registration {} appended", registration.id);
        Ok(())
    }

    fn update(&self, registration: &RunRegistration) -> AppResult<()> {
        let mut registrations = self.load()?;
        if let Some(slot) = registrations.iter_mut().find(|r| r.id == registration.id) {
            *slot = registration.clone();
            self.persist(&registrations)?;
            debug!("registration {} replaced", registration.id);
        }
        Ok(())
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        let mut registrations = self.load()?;
        registrations.retain(|r| r.id != id);
        self.persist(&registrations)?;
        debug!("registration {} removed", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::run_registration::ExperienceLevel;
    use crate::domain::weekend_run::WeekendRun;
    use crate::storage::MemoryStorage;

    fn repository() -> (Arc<MemoryStorage>, StoredRunRegistrationRepository) {
        let storage = Arc::new(MemoryStorage::new());
        let repo = StoredRunRegistrationRepository::new(storage.clone());
        (storage, repo)
    }

    fn registration(name: &str, run: &WeekendRun) -> RunRegistration {
        RunRegistration::new(
            name.to_string(),
            "john@example.com".to_string(),
            "5551234567".to_string(),
            "Jane Doe 5559876543".to_string(),
            ExperienceLevel::Intermediate,
            run,
        )
    }

    #[test]
    fn test_add_and_list_preserve_order() {
        let (_, repo) = repository();
        let run = WeekendRun::default_schedule().remove(0);
        repo.add(&registration("A", &run)).unwrap();
        repo.add(&registration("B", &run)).unwrap();
        let all = repo.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "A");
        assert_eq!(all[1].name, "B");
    }

    #[test]
    fn test_delete_leaves_other_records_untouched() {
        let (_, repo) = repository();
        let run = WeekendRun::default_schedule().remove(0);
        repo.add(&registration("A", &run)).unwrap();
        repo.add(&registration("B", &run)).unwrap();
        let keep = repo.list().unwrap()[0].clone();
        let victim = repo.list().unwrap()[1].id.clone();

        repo.delete(&victim).unwrap();

        let remaining = repo.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep.id);
        assert_eq!(remaining[0].emergency_contact, keep.emergency_contact);
        assert_eq!(remaining[0].run_details, keep.run_details);
    }

    #[test]
    fn test_update_replaces_matching_record_only() {
        let (_, repo) = repository();
        let run = WeekendRun::default_schedule().remove(0);
        repo.add(&registration("A", &run)).unwrap();
        repo.add(&registration("B", &run)).unwrap();

        let mut changed = repo.list().unwrap().remove(1);
        changed.experience_level = ExperienceLevel::Advanced;
        repo.update(&changed).unwrap();

        let all = repo.list().unwrap();
        assert_eq!(all[0].experience_level, ExperienceLevel::Intermediate);
        assert_eq!(all[1].experience_level, ExperienceLevel::Advanced);
    }

    #[test]
    fn test_stored_shape_uses_wire_field_names() {
        let (storage, repo) = repository();
        let run = WeekendRun::default_schedule().remove(1);
        repo.add(&registration("A", &run)).unwrap();
        let text = storage
            .read(keys::WEEKEND_RUN_REGISTRATIONS)
            .unwrap()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let record = &value.as_array().unwrap()[0];
        assert_eq!(record["runId"], "2");
        assert_eq!(record["experienceLevel"], "intermediate");
        assert_eq!(record["runDetails"]["distance"], "10K");
        assert_eq!(record["emergencyContact"], "Jane Doe 5559876543");
    }

    #[test]
    fn test_record_without_snapshot_still_decodes() {
        // Older registrations may predate the snapshot field
        let (storage, repo) = repository();
        storage
            .write(
                keys::WEEKEND_RUN_REGISTRATIONS,
                r#"[{"id":"1","name":"A","email":"a@x.com","phone":"5551234567",
                     "emergencyContact":"B 5550000000","experienceLevel":"beginner",
                     "runId":"9","timestamp":"2024-01-01T00:00:00Z"}]"#,
            )
            .unwrap();
        let all = repo.list().unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].run_details.is_none());
    }

    #[test]
    fn test_corrupt_stored_text_surfaces_decode_error() {
        let (storage, repo) = repository();
        storage.write(keys::WEEKEND_RUN_REGISTRATIONS, "[{]").unwrap();
        assert!(matches!(repo.list(), Err(AppError::Corrupt { .. })));
    }
}
