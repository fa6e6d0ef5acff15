//! Shared application state for the HTTP boundary.

use crate::error::{internal_error, ApiError};
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// Application state shared across handlers.
///
/// One SQLite connection guards all store access. The mutex serializes
/// conflicting writes; every handler scopes its whole operation to a single
/// guard acquisition, released on drop regardless of outcome.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps an opened, migrated connection as shared state.
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Acquires the store handle for one request-scoped unit of work.
    pub fn acquire(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.db
            .lock()
            .map_err(|_| internal_error("store handle poisoned"))
    }
}
