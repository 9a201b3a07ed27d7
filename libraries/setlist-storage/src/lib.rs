//! Setlist Storage
//!
//! Persistence adapters for the Setlist history manager.
//!
//! # Adapters
//!
//! - **[`SqlitePersistence`]**: scoped key-value table in `SQLite`
//! - **[`FilePersistence`]**: one JSON document per key in a directory
//! - **[`MemoryPersistence`]**: in-process, for tests and throwaway sessions
//!
//! All three store the versioned record produced by `setlist_core::codec`.
//!
//! # Example
//!
//! ```rust,no_run
//! use setlist_storage::{create_pool, run_migrations, SqlitePersistence};
//! use setlist_core::PersistenceAdapter;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://setlist.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqlitePersistence::new(pool, "default");
//! let history: Option<setlist_core::HistoryState<String>> = store.load().await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod file;
mod memory;
mod sqlite;

pub mod kv;

pub use error::StorageError;
pub use file::FilePersistence;
pub use memory::MemoryPersistence;
pub use sqlite::SqlitePersistence;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://setlist.db>`)
///
/// The parent directory of a file database is created if missing.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    // create_if_missing only creates the file itself
    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("SQLite pool ready");

    Ok(pool)
}
