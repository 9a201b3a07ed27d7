//! Background persistence writer
//!
//! Receives committed histories in dispatch order and hands them to the
//! adapter one at a time. Saves are full-state, so when several are queued
//! only the newest is written. Failures are logged and counted, never
//! propagated back to the editing path.

use setlist_core::{HistoryState, Item, PersistenceAdapter, SetlistError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

/// Messages accepted by the writer
pub(crate) enum PersistRequest<T> {
    /// Store this history
    Save(HistoryState<T>),
    /// Signal once every earlier request has been handled
    Flush(oneshot::Sender<()>),
}

/// Save outcome counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistenceStats {
    /// Saves the adapter accepted
    pub saved: u64,
    /// Saves that failed or timed out
    pub failed: u64,
    /// Queued saves skipped because a newer one superseded them
    pub coalesced: u64,
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    saved: AtomicU64,
    failed: AtomicU64,
    coalesced: AtomicU64,
}

impl Counters {
    pub(crate) fn snapshot(&self) -> PersistenceStats {
        PersistenceStats {
            saved: self.saved.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            coalesced: self.coalesced.load(Ordering::Relaxed),
        }
    }
}

/// Writer loop; exits once every sender is dropped and the queue is drained
pub(crate) async fn run<T: Item>(
    adapter: Arc<dyn PersistenceAdapter<T>>,
    mut rx: mpsc::UnboundedReceiver<PersistRequest<T>>,
    timeout: Option<Duration>,
    counters: Arc<Counters>,
) {
    while let Some(first) = rx.recv().await {
        let mut pending: Option<HistoryState<T>> = None;
        let mut waiters = Vec::new();

        absorb(first, &mut pending, &mut waiters, &counters);
        while let Ok(next) = rx.try_recv() {
            absorb(next, &mut pending, &mut waiters, &counters);
        }

        if let Some(state) = pending {
            save(adapter.as_ref(), &state, timeout, &counters).await;
        }

        for waiter in waiters {
            let _ = waiter.send(());
        }
    }

    debug!(store = %adapter.describe(), "Persistence writer stopped");
}

fn absorb<T>(
    request: PersistRequest<T>,
    pending: &mut Option<HistoryState<T>>,
    waiters: &mut Vec<oneshot::Sender<()>>,
    counters: &Counters,
) {
    match request {
        PersistRequest::Save(state) => {
            if pending.replace(state).is_some() {
                counters.coalesced.fetch_add(1, Ordering::Relaxed);
            }
        }
        PersistRequest::Flush(waiter) => waiters.push(waiter),
    }
}

async fn save<T: Item>(
    adapter: &dyn PersistenceAdapter<T>,
    state: &HistoryState<T>,
    timeout: Option<Duration>,
    counters: &Counters,
) {
    let result = match timeout {
        Some(limit) => match tokio::time::timeout(limit, adapter.save(state)).await {
            Ok(result) => result,
            Err(_) => Err(SetlistError::write_failure(format!(
                "save timed out after {}ms",
                limit.as_millis()
            ))),
        },
        None => adapter.save(state).await,
    };

    match result {
        Ok(()) => {
            counters.saved.fetch_add(1, Ordering::Relaxed);
            debug!(
                store = %adapter.describe(),
                items = state.len(),
                undo_depth = state.undo_depth(),
                "Saved history"
            );
        }
        Err(e) => {
            counters.failed.fetch_add(1, Ordering::Relaxed);
            warn!(store = %adapter.describe(), error = %e, "Failed to save history");
        }
    }
}
