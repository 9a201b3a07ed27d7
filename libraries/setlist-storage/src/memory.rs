//! In-process persistence adapter

use async_trait::async_trait;
use setlist_core::codec;
use setlist_core::{HistoryState, Item, PersistenceAdapter, Result, SetlistError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// Keeps the encoded record in memory
///
/// Goes through the same codec as the durable adapters, so it exercises
/// serialization fidelity. Loads and saves can be forced to fail to exercise
/// the manager's degraded paths.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    record: Mutex<Option<String>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryPersistence {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with raw record text (valid or not)
    pub fn with_record(text: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(text.into())),
            ..Self::default()
        }
    }

    /// Make subsequent loads fail
    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent saves fail
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Raw record text currently stored
    pub async fn record(&self) -> Option<String> {
        self.record.lock().await.clone()
    }
}

#[async_trait]
impl<T: Item> PersistenceAdapter<T> for MemoryPersistence {
    async fn load(&self) -> Result<Option<HistoryState<T>>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(SetlistError::read_failure("memory store unavailable"));
        }

        let record = self.record.lock().await;
        record.as_deref().map(codec::decode::<T>).transpose()
    }

    async fn save(&self, state: &HistoryState<T>) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(SetlistError::write_failure("memory store unavailable"));
        }

        let text = codec::encode(state)?;
        *self.record.lock().await = Some(text);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
