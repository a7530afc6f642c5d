//! Shared application state.
//!
//! Requests are handled statelessly; the only shared resource is the
//! database pool. All consistency is enforced by conditional SQL, never by
//! in-process locking.

use crate::persistence::Database;
use sqlx::PgPool;

pub struct AppState {
    db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn pool(&self) -> &PgPool {
        self.db.pool()
    }
}
