//! Bounded history holder
//!
//! Keeps exactly one history and runs the reducer against it, applying the
//! optional undo-depth bound after every transition.

use crate::reducer;
use setlist_core::{Command, HistoryState, Result};

/// Holds one history and an optional undo-depth bound
#[derive(Debug, Clone)]
pub struct HistoryStore<T> {
    state: HistoryState<T>,

    /// Maximum undo steps kept (None = unbounded)
    max_depth: Option<usize>,
}

impl<T: Clone> HistoryStore<T> {
    /// Create a store with an empty history
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            state: HistoryState::new(),
            max_depth,
        }
    }

    /// Create a store around an existing history
    ///
    /// The history is trimmed to `max_depth` immediately.
    pub fn with_state(mut state: HistoryState<T>, max_depth: Option<usize>) -> Self {
        if let Some(depth) = max_depth {
            state.trim_past(depth);
        }
        Self { state, max_depth }
    }

    /// Apply a command and commit the result
    ///
    /// On error the held history is left untouched.
    ///
    /// # Errors
    /// Propagates reducer errors (`IndexOutOfRange`)
    pub fn apply(&mut self, command: Command<T>) -> Result<&HistoryState<T>> {
        let mut next = reducer::apply(&self.state, command)?;

        if let Some(depth) = self.max_depth {
            let dropped = next.trim_past(depth);
            if dropped > 0 {
                tracing::trace!(dropped, depth, "Discarded oldest undo snapshots");
            }
        }

        self.state = next;
        Ok(&self.state)
    }

    /// Current history
    pub fn state(&self) -> &HistoryState<T> {
        &self.state
    }

    /// Maximum undo depth
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Change the maximum undo depth
    ///
    /// If the new bound is smaller than the current depth, oldest entries are discarded
    pub fn set_max_depth(&mut self, max_depth: Option<usize>) {
        self.max_depth = max_depth;
        if let Some(depth) = max_depth {
            self.state.trim_past(depth);
        }
    }

    /// Consume the store, returning its history
    pub fn into_state(self) -> HistoryState<T> {
        self.state
    }
}

impl<T: Clone> Default for HistoryStore<T> {
    fn default() -> Self {
        Self::new(None)
    }
}
