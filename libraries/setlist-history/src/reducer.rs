//! Pure history transitions
//!
//! Every mutation, including history navigation, goes through [`apply`].

use setlist_core::{Command, HistoryState, Result, SetlistError, Snapshot};
use std::collections::VecDeque;

/// Apply a command to a history, producing the next history
///
/// The input is never mutated and the same `(state, command)` pair always
/// yields the same result. Item payloads are assumed to have passed
/// [`Command::validated`].
///
/// | Command | Effect |
/// |---|---|
/// | `Add` | push present to past, append item, clear future |
/// | `RemoveAt` / `UpdateAt` | push present to past, edit, clear future |
/// | `Clear` | no-op on empty present, else push present and empty it |
/// | `Undo` / `Redo` | move one snapshot between the stacks, no-op at the ends |
/// | `Restore` | replace everything |
///
/// # Errors
/// Returns `SetlistError::IndexOutOfRange` for `RemoveAt`/`UpdateAt` outside
/// the present snapshot
pub fn apply<T: Clone>(state: &HistoryState<T>, command: Command<T>) -> Result<HistoryState<T>> {
    match command {
        Command::Add(item) => {
            let mut next = state.present.clone();
            next.push(item);
            Ok(commit(state, next))
        }
        Command::RemoveAt(index) => {
            check_index(state, index)?;
            let mut next = state.present.clone();
            next.remove(index);
            Ok(commit(state, next))
        }
        Command::UpdateAt { index, item } => {
            check_index(state, index)?;
            let mut next = state.present.clone();
            next[index] = item;
            Ok(commit(state, next))
        }
        Command::Clear => {
            if state.present.is_empty() {
                return Ok(state.clone());
            }
            Ok(commit(state, Vec::new()))
        }
        Command::Undo => {
            let mut next = state.clone();
            if let Some(previous) = next.past.pop_back() {
                let current = std::mem::replace(&mut next.present, previous);
                next.future.push_front(current);
            }
            Ok(next)
        }
        Command::Redo => {
            let mut next = state.clone();
            if let Some(upcoming) = next.future.pop_front() {
                let current = std::mem::replace(&mut next.present, upcoming);
                next.past.push_back(current);
            }
            Ok(next)
        }
        Command::Restore(restored) => Ok(restored),
    }
}

/// Record an edit: the old present joins the past and the redo path is dropped
fn commit<T: Clone>(state: &HistoryState<T>, next: Snapshot<T>) -> HistoryState<T> {
    let mut past = state.past.clone();
    past.push_back(state.present.clone());
    HistoryState {
        past,
        present: next,
        future: VecDeque::new(),
    }
}

fn check_index<T>(state: &HistoryState<T>, index: usize) -> Result<()> {
    let len = state.present.len();
    if index >= len {
        return Err(SetlistError::IndexOutOfRange { index, len });
    }
    Ok(())
}
