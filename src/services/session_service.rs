// src/services/session_service.rs
//
// Session Guard - the single flag gating the admin views.
//
// There are no credentials here: the flag is the whole session state, the
// same "adminAuthenticated" marker the admin dashboard has always checked.

use log::info;
use std::sync::Arc;

use crate::error::AppResult;
use crate::storage::{keys, StorageGateway};

const SIGNED_IN: &str = "true";

pub struct SessionService {
    storage: Arc<dyn StorageGateway>,
}

impl SessionService {
    pub fn new(storage: Arc<dyn StorageGateway>) -> Self {
        Self { storage }
    }

    pub fn sign_in(&self) -> AppResult<()> {
        self.storage.write(keys::ADMIN_SESSION, SIGNED_IN)?;
        info!("admin session opened");
        Ok(())
    }

    /// Only the literal flag value counts; anything else stays locked out.
    pub fn is_authenticated(&self) -> AppResult<bool> {
        Ok(self.storage.read(keys::ADMIN_SESSION)?.as_deref() == Some(SIGNED_IN))
    }

    pub fn sign_out(&self) -> AppResult<()> {
        self.storage.remove(keys::ADMIN_SESSION)?;
        info!("admin session closed");
        Ok(())
    }
}
