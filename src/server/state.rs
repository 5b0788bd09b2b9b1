//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Application state containing shared resources.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool and the
/// origin list sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Origins allowed by the CORS guard, already normalized by `Config`.
    pub allowed_origins: Arc<[String]>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, allowed_origins: Vec<String>) -> Self {
        Self {
            db,
            allowed_origins: allowed_origins.into(),
        }
    }
}
