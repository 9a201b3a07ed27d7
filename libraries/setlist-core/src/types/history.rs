/// History domain types
use crate::error::Result;
use crate::types::Item;
use std::collections::VecDeque;

/// One ordered collection state at a point in time
///
/// Insertion order is significant and duplicates are permitted.
pub type Snapshot<T> = Vec<T>;

/// Linear undo/redo history around the current snapshot
///
/// ```text
/// past (oldest first)        present        future (nearest-undone first)
/// [s0, s1, ..., sN]   <-undo-  [..]  -redo->  [f0, f1, ...]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryState<T> {
    /// Snapshots that were "present" immediately before a mutation
    pub past: VecDeque<Snapshot<T>>,

    /// The current collection
    pub present: Snapshot<T>,

    /// Snapshots that were "present" immediately before an undo
    pub future: VecDeque<Snapshot<T>>,
}

impl<T> HistoryState<T> {
    /// Create an empty history
    pub fn new() -> Self {
        Self {
            past: VecDeque::new(),
            present: Vec::new(),
            future: VecDeque::new(),
        }
    }

    /// Create a history whose present is `items` and whose stacks are empty
    pub fn with_present(items: impl Into<Snapshot<T>>) -> Self {
        Self {
            past: VecDeque::new(),
            present: items.into(),
            future: VecDeque::new(),
        }
    }

    /// Whether an undo would change the state
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo would change the state
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undo steps available
    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    /// Number of redo steps available
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Number of items in the present snapshot
    pub fn len(&self) -> usize {
        self.present.len()
    }

    /// Whether the present snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }

    /// Whether nothing has ever been recorded (all three fields empty)
    pub fn is_pristine(&self) -> bool {
        self.past.is_empty() && self.present.is_empty() && self.future.is_empty()
    }

    /// Discard the oldest `past` entries beyond `max_depth`
    ///
    /// Returns how many snapshots were dropped.
    pub fn trim_past(&mut self, max_depth: usize) -> usize {
        let excess = self.past.len().saturating_sub(max_depth);
        self.past.drain(..excess);
        excess
    }
}

impl<T: Item> HistoryState<T> {
    /// Run [`Item::validate`] on every element of every snapshot
    ///
    /// # Errors
    /// Returns the first validation error encountered
    pub fn validate_items(&self) -> Result<()> {
        self.past
            .iter()
            .chain(std::iter::once(&self.present))
            .chain(self.future.iter())
            .flatten()
            .try_for_each(|item| item.validate())
    }
}

impl<T> Default for HistoryState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn songs(names: &[&str]) -> Snapshot<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn new_history_is_pristine() {
        let state: HistoryState<String> = HistoryState::default();
        assert!(state.is_pristine());
        assert!(state.is_empty());
        assert!(!state.can_undo());
        assert!(!state.can_redo());
    }

    #[test]
    fn trim_past_drops_oldest_first() {
        let mut state = HistoryState {
            past: VecDeque::from(vec![songs(&["a"]), songs(&["a", "b"]), songs(&["a", "b", "c"])]),
            present: songs(&["a", "b", "c", "d"]),
            future: VecDeque::new(),
        };

        assert_eq!(state.trim_past(2), 1);
        assert_eq!(state.undo_depth(), 2);
        assert_eq!(state.past[0], songs(&["a", "b"]));

        // Already within bounds
        assert_eq!(state.trim_past(5), 0);
        assert_eq!(state.undo_depth(), 2);
    }

    #[test]
    fn validate_items_checks_every_stack() {
        let mut state = HistoryState::with_present(songs(&["ok"]));
        assert!(state.validate_items().is_ok());

        state.future.push_back(songs(&["fine", " "]));
        assert!(state.validate_items().is_err());
    }
}
