//! Shared application state for all routes.

use sqlx::SqlitePool;

/// One pool for the whole process, threaded explicitly through every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
