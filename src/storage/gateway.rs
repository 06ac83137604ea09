// src/storage/gateway.rs

use crate::error::AppResult;

/// The persistence gateway: a flat key/value store of text blobs.
///
/// Contract:
/// - `read` returns the stored text verbatim, `None` when the key is absent
/// - `write` overwrites whatever was stored before
/// - last writer wins; there is no locking and no change notification
///
/// Repositories serialize whole collections to JSON text and store them
/// under the fixed keys below. Decoding stored text back into typed records
/// happens in the repositories, never here.
pub trait StorageGateway: Send + Sync {
    fn read(&self, key: &str) -> AppResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Fixed storage keys. These are the exact key names the collections have
/// always been stored under; changing one strands existing data.
pub mod keys {
    /// JSON array of program enrollments
    pub const PROGRAM_ENROLLMENTS: &str = "programEnrollments";

    /// JSON array of weekend run events
    pub const WEEKEND_RUNS: &str = "weekendRuns";

    /// JSON array of weekend run registrations
    pub const WEEKEND_RUN_REGISTRATIONS: &str = "weekendRunRegistrations";

    /// Admin session flag, the literal text "true" when signed in
    pub const ADMIN_SESSION: &str = "adminAuthenticated";
}
