//! Shared adapters and helpers for history manager tests

#![allow(dead_code)]

use async_trait::async_trait;
use setlist_core::{HistoryState, PersistenceAdapter, Result};
use setlist_storage::MemoryPersistence;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;

/// Memory store whose saves wait for a permit
///
/// Lets a test hold a save "in flight" and observe that editing continues.
#[derive(Debug)]
pub struct GatedPersistence {
    pub inner: MemoryPersistence,
    pub gate: Semaphore,
    pub started: AtomicUsize,
}

impl GatedPersistence {
    pub fn new() -> Self {
        Self {
            inner: MemoryPersistence::new(),
            gate: Semaphore::new(0),
            started: AtomicUsize::new(0),
        }
    }

    pub fn release(&self, saves: usize) {
        self.gate.add_permits(saves);
    }
}

#[async_trait]
impl PersistenceAdapter<String> for GatedPersistence {
    async fn load(&self) -> Result<Option<HistoryState<String>>> {
        self.inner.load().await
    }

    async fn save(&self, state: &HistoryState<String>) -> Result<()> {
        self.started.fetch_add(1, Ordering::SeqCst);
        self.gate
            .acquire()
            .await
            .expect("gate semaphore closed")
            .forget();
        self.inner.save(state).await
    }
}

/// Adapter whose operations never complete
#[derive(Debug, Default)]
pub struct HangingPersistence;

#[async_trait]
impl PersistenceAdapter<String> for HangingPersistence {
    async fn load(&self) -> Result<Option<HistoryState<String>>> {
        std::future::pending().await
    }

    async fn save(&self, _state: &HistoryState<String>) -> Result<()> {
        std::future::pending().await
    }
}

pub fn song(name: &str) -> String {
    name.to_string()
}

pub fn songs(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| song(s)).collect()
}
