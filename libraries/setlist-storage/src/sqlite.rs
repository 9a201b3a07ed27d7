//! `SQLite`-backed persistence adapter

use async_trait::async_trait;
use setlist_core::codec::{self, HISTORY_KEY};
use setlist_core::{HistoryState, Item, PersistenceAdapter, Result, SetlistError};
use sqlx::SqlitePool;

use crate::kv;

/// Stores the history record in the `kv_store` table
///
/// One row per `(scope, key)`; saving upserts the row.
#[derive(Debug, Clone)]
pub struct SqlitePersistence {
    pool: SqlitePool,
    scope: String,
    key: String,
}

impl SqlitePersistence {
    /// Adapter for the playlist history key in `scope`
    pub fn new(pool: SqlitePool, scope: impl Into<String>) -> Self {
        Self::with_key(pool, scope, HISTORY_KEY)
    }

    /// Adapter for a custom key in `scope`
    pub fn with_key(pool: SqlitePool, scope: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            pool,
            scope: scope.into(),
            key: key.into(),
        }
    }

    /// Open (or create) a database, run migrations, and build an adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migrations fail
    pub async fn connect(
        database_url: &str,
        scope: impl Into<String>,
    ) -> std::result::Result<Self, crate::StorageError> {
        let pool = crate::create_pool(database_url).await?;
        crate::run_migrations(&pool).await?;
        Ok(Self::new(pool, scope))
    }

    /// Scope this adapter writes to
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Key this adapter writes to
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl<T: Item> PersistenceAdapter<T> for SqlitePersistence {
    async fn load(&self) -> Result<Option<HistoryState<T>>> {
        let text = kv::get_value(&self.pool, &self.scope, &self.key)
            .await
            .map_err(|e| SetlistError::read_failure(e.to_string()))?;

        text.map(|text| codec::decode(&text)).transpose()
    }

    async fn save(&self, state: &HistoryState<T>) -> Result<()> {
        let text = codec::encode(state)?;
        kv::set_value(&self.pool, &self.scope, &self.key, &text)
            .await
            .map_err(|e| SetlistError::write_failure(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("sqlite:{}/{}", self.scope, self.key)
    }
}
