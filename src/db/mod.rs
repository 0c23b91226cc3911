mod configs;
pub(crate) mod row_helpers;

use anyhow::{Context, Result};
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};

use crate::models::*;

/// Typed error for "resource not found" — enables reliable downcast
/// in the API error handler instead of fragile string matching.
#[derive(Debug)]
pub struct NotFoundError {
    pub resource: String,
    pub id: String,
}

impl NotFoundError {
    pub fn new(resource: &str, id: &str) -> Self {
        Self {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }
}

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} not found: {}", self.resource, self.id)
    }
}

impl std::error::Error for NotFoundError {}

/// Store handles all database operations, delegating to per-entity repo modules.
#[derive(Clone)]
pub struct Store {
    pool: Pool<Sqlite>,
}

impl Store {
    /// Create a new database store with a specific pool size
    pub async fn with_pool_size(db_path: &str, max_connections: u32) -> Result<Self> {
        let db_url = format!("sqlite:{}?mode=rwc", db_path);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&db_url)
            .await
            .context("Failed to connect to database")?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Run database migrations
    async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(())
    }

    pub async fn list_configs(&self, query: &ConfigQuery) -> Result<Vec<DeviceConfig>> {
        configs::ConfigRepo::list(&self.pool, query).await
    }

    pub async fn get_config(&self, id: i64) -> Result<Option<DeviceConfig>> {
        configs::ConfigRepo::get(&self.pool, id).await
    }

    pub async fn create_config(&self, req: &CreateConfigRequest) -> Result<DeviceConfig> {
        configs::ConfigRepo::create(&self.pool, req).await
    }

    pub async fn update_config(&self, id: i64, req: &CreateConfigRequest) -> Result<DeviceConfig> {
        configs::ConfigRepo::update(&self.pool, id, req).await
    }

    pub async fn delete_config(&self, id: i64) -> Result<()> {
        configs::ConfigRepo::delete(&self.pool, id).await
    }

    pub async fn batch_delete_configs(&self, ids: &[i64]) -> Result<u64> {
        configs::ConfigRepo::batch_delete(&self.pool, ids).await
    }
}
