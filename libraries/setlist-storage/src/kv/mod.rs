//! Scoped key-value storage
//!
//! Values are opaque text (JSON documents in practice), addressed by a
//! `(scope, key)` pair. A scope groups the keys of one editing session or
//! feature; keys are well-known names such as `playlist.history.v1`.
//!
//! # Example
//!
//! ```rust,no_run
//! use setlist_storage::kv;
//! # async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//! kv::set_value(pool, "default", "playlist.history.v1", "{}").await?;
//! let value = kv::get_value(pool, "default", "playlist.history.v1").await?;
//! # Ok(())
//! # }
//! ```

use sqlx::SqlitePool;

use crate::error::Result;

/// Get a value
///
/// # Returns
///
/// Returns `Ok(Some(value))` if the key exists, `Ok(None)` if not found
///
/// # Errors
///
/// Returns an error if the database query fails
pub async fn get_value(pool: &SqlitePool, scope: &str, key: &str) -> Result<Option<String>> {
    let row: Option<(String,)> =
        sqlx::query_as("SELECT value FROM kv_store WHERE scope = ? AND key = ?")
            .bind(scope)
            .bind(key)
            .fetch_optional(pool)
            .await?;

    Ok(row.map(|(value,)| value))
}

/// Insert or replace a value
///
/// # Errors
///
/// Returns an error if the database query fails
pub async fn set_value(pool: &SqlitePool, scope: &str, key: &str, value: &str) -> Result<()> {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO kv_store (scope, key, value, updated_at)
         VALUES (?, ?, ?, ?)
         ON CONFLICT(scope, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(scope)
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a value
///
/// # Returns
///
/// Returns `Ok(true)` if a value was deleted, `Ok(false)` if the key was absent
///
/// # Errors
///
/// Returns an error if the database query fails
pub async fn delete_value(pool: &SqlitePool, scope: &str, key: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM kv_store WHERE scope = ? AND key = ?")
        .bind(scope)
        .bind(key)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// List the keys stored in a scope, sorted
///
/// # Errors
///
/// Returns an error if the database query fails
pub async fn list_keys(pool: &SqlitePool, scope: &str) -> Result<Vec<String>> {
    let rows: Vec<(String,)> = sqlx::query_as("SELECT key FROM kv_store WHERE scope = ? ORDER BY key")
        .bind(scope)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|(key,)| key).collect())
}
