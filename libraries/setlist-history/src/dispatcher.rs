//! Command dispatcher
//!
//! The single entry point through which every mutation flows:
//!
//! ```text
//! dispatch(cmd) ──► validate ──► HistoryStore::apply ──► publish ──► return
//!                                                          │
//!                                                          └──► writer queue ──► adapter.save
//! ```
//!
//! Dispatches are serialized by a fair (FIFO) mutex, so no command is ever
//! applied to a stale present. The in-memory transition never waits on
//! storage: saves run on a background task and their failures are logged.

use crate::config::HistoryConfig;
use crate::store::HistoryStore;
use crate::writer::{self, Counters, PersistRequest, PersistenceStats};
use setlist_core::{Command, HistoryState, Item, PersistenceAdapter, Result, SetlistError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

struct Inner<T> {
    store: HistoryStore<T>,

    /// None once shut down
    persist_tx: Option<mpsc::UnboundedSender<PersistRequest<T>>>,
}

/// Serializes commands against one history and persists every change
///
/// Construct with [`CommandDispatcher::open`], which hydrates from the
/// adapter before returning, so no command can run before hydration.
/// After [`CommandDispatcher::shutdown`], dispatch fails with
/// `SetlistError::NotReady`.
///
/// Must be created inside a Tokio runtime.
pub struct CommandDispatcher<T: Item> {
    inner: Mutex<Inner<T>>,
    published: watch::Sender<HistoryState<T>>,
    writer: Mutex<Option<JoinHandle<()>>>,
    counters: Arc<Counters>,
}

impl<T: Item> CommandDispatcher<T> {
    /// Hydrate from `adapter` and start accepting commands
    ///
    /// A failed, timed-out, or invalid load is logged and treated as
    /// "no prior state".
    pub async fn open<A>(adapter: A, config: HistoryConfig) -> Self
    where
        A: PersistenceAdapter<T> + 'static,
    {
        let adapter: Arc<dyn PersistenceAdapter<T>> = Arc::new(adapter);
        let initial = hydrate(adapter.as_ref(), config.storage_timeout()).await;

        let mut store = HistoryStore::new(config.max_depth);
        if let Err(e) = store.apply(Command::Restore(initial)) {
            warn!(error = %e, "Failed to restore hydrated history, starting empty");
        }

        let (published, _) = watch::channel(store.state().clone());
        let (persist_tx, persist_rx) = mpsc::unbounded_channel();
        let counters = Arc::new(Counters::default());

        let handle = tokio::spawn(writer::run(
            adapter,
            persist_rx,
            config.storage_timeout(),
            Arc::clone(&counters),
        ));

        Self {
            inner: Mutex::new(Inner {
                store,
                persist_tx: Some(persist_tx),
            }),
            published,
            writer: Mutex::new(Some(handle)),
            counters,
        }
    }

    /// Validate, apply, publish, and queue persistence for one command
    ///
    /// Returns the new in-memory history as soon as it is committed; the
    /// save happens afterwards.
    ///
    /// # Errors
    /// - `InvalidArgument` if an item payload fails validation
    /// - `IndexOutOfRange` for positions outside the present snapshot
    /// - `NotReady` after shutdown
    ///
    /// On error the history is unchanged.
    pub async fn dispatch(&self, command: Command<T>) -> Result<HistoryState<T>> {
        let mut inner = self.inner.lock().await;

        if inner.persist_tx.is_none() {
            return Err(SetlistError::NotReady);
        }

        let kind = command.kind();
        let rejected = |e: SetlistError| {
            debug!(command = kind, error = %e, "Rejected command");
            e
        };

        let command = command.validated().map_err(rejected)?;
        let state = inner.store.apply(command).map_err(rejected)?.clone();

        debug!(
            command = kind,
            items = state.len(),
            undo_depth = state.undo_depth(),
            redo_depth = state.redo_depth(),
            "Applied command"
        );

        self.published.send_replace(state.clone());

        if let Some(tx) = &inner.persist_tx {
            if tx.send(PersistRequest::Save(state.clone())).is_err() {
                warn!(command = kind, "Persistence writer is gone, change kept in memory only");
            }
        }

        Ok(state)
    }

    /// Append an item
    pub async fn add(&self, item: T) -> Result<HistoryState<T>> {
        self.dispatch(Command::Add(item)).await
    }

    /// Remove the item at `index`
    pub async fn remove_at(&self, index: usize) -> Result<HistoryState<T>> {
        self.dispatch(Command::RemoveAt(index)).await
    }

    /// Replace the item at `index`
    pub async fn update_at(&self, index: usize, item: T) -> Result<HistoryState<T>> {
        self.dispatch(Command::UpdateAt { index, item }).await
    }

    /// Empty the list
    pub async fn clear(&self) -> Result<HistoryState<T>> {
        self.dispatch(Command::Clear).await
    }

    /// Step back one snapshot
    pub async fn undo(&self) -> Result<HistoryState<T>> {
        self.dispatch(Command::Undo).await
    }

    /// Step forward one undone snapshot
    pub async fn redo(&self) -> Result<HistoryState<T>> {
        self.dispatch(Command::Redo).await
    }

    /// Latest committed history (never blocks)
    pub fn current(&self) -> HistoryState<T> {
        self.published.borrow().clone()
    }

    /// Observe committed histories
    pub fn subscribe(&self) -> watch::Receiver<HistoryState<T>> {
        self.published.subscribe()
    }

    /// Save outcome counters so far
    pub fn persistence_stats(&self) -> PersistenceStats {
        self.counters.snapshot()
    }

    /// Wait until every change dispatched so far has been handed to the adapter
    ///
    /// Completes whether the saves succeeded or failed. Returns immediately
    /// after shutdown.
    pub async fn flush(&self) {
        let (tx, rx) = oneshot::channel();
        {
            let inner = self.inner.lock().await;
            match &inner.persist_tx {
                Some(persist_tx) => {
                    if persist_tx.send(PersistRequest::Flush(tx)).is_err() {
                        return;
                    }
                }
                None => return,
            }
        }
        let _ = rx.await;
    }

    /// Flush pending saves and stop accepting commands
    pub async fn shutdown(&self) {
        let sender = self.inner.lock().await.persist_tx.take();
        drop(sender);

        if let Some(handle) = self.writer.lock().await.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "Persistence writer task failed");
            }
        }

        info!("History dispatcher shut down");
    }
}

/// Load the stored history, falling back to empty on any problem
async fn hydrate<T: Item>(
    adapter: &dyn PersistenceAdapter<T>,
    timeout: Option<Duration>,
) -> HistoryState<T> {
    let loaded = match timeout {
        Some(limit) => match tokio::time::timeout(limit, adapter.load()).await {
            Ok(result) => result,
            Err(_) => Err(SetlistError::read_failure(format!(
                "load timed out after {}ms",
                limit.as_millis()
            ))),
        },
        None => adapter.load().await,
    };

    match loaded {
        Ok(Some(state)) => match state.validate_items() {
            Ok(()) => {
                info!(
                    store = %adapter.describe(),
                    items = state.len(),
                    undo_depth = state.undo_depth(),
                    redo_depth = state.redo_depth(),
                    "Hydrated history"
                );
                state
            }
            Err(e) => {
                warn!(store = %adapter.describe(), error = %e, "Discarding invalid stored history");
                HistoryState::new()
            }
        },
        Ok(None) => {
            info!(store = %adapter.describe(), "No stored history, starting empty");
            HistoryState::new()
        }
        Err(e) => {
            warn!(store = %adapter.describe(), error = %e, "Failed to load history, starting empty");
            HistoryState::new()
        }
    }
}
