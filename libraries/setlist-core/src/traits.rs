/// Core traits for Setlist
use crate::error::Result;
use crate::types::{HistoryState, Item};
use async_trait::async_trait;
use std::sync::Arc;

/// Scoped asynchronous storage for one history
///
/// The history manager reads from the adapter once at startup and writes the
/// full state after every committed change. The core is agnostic to the
/// backing medium (file, embedded key-value store, remote store).
///
/// Implementations should surface problems as errors rather than panicking:
/// the manager treats a failed `load` as "no prior state" and a failed `save`
/// as a logged warning.
#[async_trait]
pub trait PersistenceAdapter<T: Item>: Send + Sync {
    /// Load the last stored history
    ///
    /// Returns `Ok(None)` if nothing has been stored yet.
    ///
    /// # Errors
    /// Returns `SetlistError::PersistenceReadFailure` if the stored data is
    /// unreadable or fails structural validation
    async fn load(&self) -> Result<Option<HistoryState<T>>>;

    /// Durably store the full history
    ///
    /// # Errors
    /// Returns an error if the backing medium rejects the write
    async fn save(&self, state: &HistoryState<T>) -> Result<()>;

    /// Human-readable location, used in log messages
    fn describe(&self) -> String {
        "persistence adapter".to_string()
    }
}

#[async_trait]
impl<T, P> PersistenceAdapter<T> for Arc<P>
where
    T: Item,
    P: PersistenceAdapter<T> + ?Sized,
{
    async fn load(&self) -> Result<Option<HistoryState<T>>> {
        (**self).load().await
    }

    async fn save(&self, state: &HistoryState<T>) -> Result<()> {
        (**self).save(state).await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
