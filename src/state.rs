use crate::{config::Config, database::DbPool};

/// Application state shared across all HTTP handlers
///
/// This struct contains shared resources that need to be accessed
/// by API handlers, such as the database pool and the loaded config.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing the database
    pub pool: DbPool,
    /// Application configuration (session TTL, cookie settings)
    pub config: Config,
}

impl AppState {
    /// Create a new AppState instance
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    /// * `config` - Loaded application configuration
    pub fn new(pool: DbPool, config: Config) -> Self {
        Self { pool, config }
    }
}
