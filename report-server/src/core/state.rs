use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppResult;

/// Server state — shared handles for every request
///
/// Cloning is shallow (Arc + pool handle); handlers receive it through
/// axum's `State` extractor.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
}

impl ServerState {
    /// Open the database and build the shared state
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.database_path).await?;
        Ok(Self {
            config: Arc::new(config.clone()),
            db,
        })
    }

    /// Test state backed by an in-memory database
    pub async fn in_memory(config: &Config) -> AppResult<Self> {
        let db = DbService::in_memory().await?;
        Ok(Self {
            config: Arc::new(config.clone()),
            db,
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
