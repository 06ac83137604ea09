// src/repositories/weekend_run_repository.rs
//
// Weekend run event persistence

use log::{debug, info};
use std::sync::Arc;

use crate::domain::weekend_run::WeekendRun;
use crate::error::{AppError, AppResult};
use crate::storage::{keys, StorageGateway};

#[cfg_attr(test, mockall::automock)]
pub trait WeekendRunRepository: Send + Sync {
    /// Seed the default three-run schedule when nothing has ever been
    /// stored. A stored empty collection counts as data and is left alone.
    /// Explicit initialization step; `list` never writes.
    fn ensure_seeded(&self) -> AppResult<()>;
    fn list(&self) -> AppResult<Vec<WeekendRun>>;
    fn get(&self, id: &str) -> AppResult<Option<WeekendRun>>;
    fn add(&self, run: &WeekendRun) -> AppResult<()>;
    /// Replaces the record with the matching id. Silent no-op if absent.
    fn update(&self, run: &WeekendRun) -> AppResult<()>;
    fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct StoredWeekendRunRepository {
    storage: Arc<dyn StorageGateway>,
}

impl StoredWeekendRunRepository {
    pub fn new(storage: Arc<dyn StorageGateway>) -> Self {
        Self { storage }
    }

    fn load(&self) -> AppResult<Vec<WeekendRun>> {
        match self.storage.read(keys::WEEKEND_RUNS)? {
            Some(text) => serde_json::from_str(&text).map_err(|source| AppError::Corrupt {
                key: keys::WEEKEND_RUNS.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self, runs: &[WeekendRun]) -> AppResult<()> {
        let text = serde_json::to_string(runs)?;
        self.storage.write(keys::WEEKEND_RUNS, &text)
    }
}

impl WeekendRunRepository for StoredWeekendRunRepository {
    fn ensure_seeded(&self) -> AppResult<()> {
        if self.storage.read(keys::WEEKEND_RUNS)?.is_none() {
            let schedule = WeekendRun::default_schedule();
            self.persist(&schedule)?;
            info!("seeded {} default weekend runs", schedule.len());
        }
        Ok(())
    }

    fn list(&self) -> AppResult<Vec<WeekendRun>> {
        self.load()
    }

    fn get(&self, id: &str) -> AppResult<Option<WeekendRun>> {
        Ok(self.load()?.into_iter().find(|r| r.id == id))
    }

    fn add(&self, run: &WeekendRun) -> AppResult<()> {
        let mut runs = self.load()?;
        runs.push(run.clone());
        self.persist(&runs)?;
        debug!("weekend run {} appended", run.id);
        Ok(())
    }

    fn update(&self, run: &WeekendRun) -> AppResult<()> {
        let mut runs = self.load()?;
        if let Some(slot) = runs.iter_mut().find(|r| r.id == run.id) {
            *slot = run.clone();
            self.persist(&runs)?;
            debug!("weekend run {} replaced", run.id);
        }
        Ok(())
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        let mut runs = self.load()?;
        runs.retain(|r| r.id != id);
        self.persist(&runs)?;
        debug!("weekend run {} removed", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn repository() -> (Arc<MemoryStorage>, StoredWeekendRunRepository) {
        let storage = Arc::new(MemoryStorage::new());
        let repo = StoredWeekendRunRepository::new(storage.clone());
        (storage, repo)
    }

    #[test]
    fn test_list_never_seeds() {
        let (storage, repo) = repository();
        assert!(repo.list().unwrap().is_empty());
        assert!(storage.read(keys::WEEKEND_RUNS).unwrap().is_none());
    }

    #[test]
    fn test_ensure_seeded_writes_defaults_once() {
        let (_, repo) = repository();
        repo.ensure_seeded().unwrap();

        let runs = repo.list().unwrap();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].date, "Saturday, Dec 7");
        assert_eq!(runs[1].distance, "10K");
        assert_eq!(runs[2].time, "7:00 AM");

        // A second pass must not re-seed over mutations
        repo.delete("2").unwrap();
        repo.ensure_seeded().unwrap();
        let runs = repo.list().unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1].id, "3");
    }

    #[test]
    fn test_ensure_seeded_leaves_stored_empty_collection_alone() {
        let (storage, repo) = repository();
        storage.write(keys::WEEKEND_RUNS, "[]").unwrap();
        repo.ensure_seeded().unwrap();
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let (_, repo) = repository();
        repo.ensure_seeded().unwrap();
        let run = repo.get("2").unwrap().unwrap();
        assert_eq!(run.location, "High Park");
        assert!(repo.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_update_replaces_full_field_set() {
        let (_, repo) = repository();
        repo.ensure_seeded().unwrap();
        let mut run = repo.get("1").unwrap().unwrap();
        run.participants = 30;
        run.time = "6:00 AM".to_string();

        repo.update(&run).unwrap();

        let stored = repo.get("1").unwrap().unwrap();
        assert_eq!(stored.participants, 30);
        assert_eq!(stored.time, "6:00 AM");
        assert_eq!(repo.list().unwrap().len(), 3);
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let (_, repo) = repository();
        repo.ensure_seeded().unwrap();
        repo.delete("1").unwrap();
        let runs = repo.list().unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].id, "2");
        assert_eq!(runs[1].id, "3");
    }

    #[test]
    fn test_corrupt_stored_text_surfaces_decode_error() {
        let (storage, repo) = repository();
        storage.write(keys::WEEKEND_RUNS, "not an array").unwrap();
        assert!(matches!(repo.list(), Err(AppError::Corrupt { .. })));
    }
}
