//! Shared application state handed to every handler.
//!
//! # Invariants
//! - The store connection is established once at process start and reused
//!   across all requests.
//! - The handle is passed explicitly via axum `State`, never through a
//!   module-level singleton.

use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to the single shared store connection.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps an already-opened and migrated store connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            store: Arc::new(Mutex::new(conn)),
        }
    }

    /// Locks the shared connection for one store operation.
    ///
    /// SQLite calls are short and synchronous; the guard is never held
    /// across an await point.
    pub fn connection(
        &self,
    ) -> Result<MutexGuard<'_, Connection>, PoisonError<MutexGuard<'_, Connection>>> {
        self.store.lock()
    }
}
