/// Command domain types
use crate::error::Result;
use crate::types::{HistoryState, Item};

/// A description of an intended mutation
///
/// Undo and Redo are data-free commands so the same reducer handles every
/// transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<T> {
    /// Append an item to the end of the present snapshot
    Add(T),

    /// Remove the item at `index`
    RemoveAt(usize),

    /// Replace the item at `index`
    UpdateAt {
        /// Position of the item to replace
        index: usize,
        /// Replacement value
        item: T,
    },

    /// Empty the present snapshot (undoable)
    Clear,

    /// Step back one snapshot
    Undo,

    /// Step forward one undone snapshot
    Redo,

    /// Replace the whole history (startup hydration)
    Restore(HistoryState<T>),
}

impl<T> Command<T> {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::RemoveAt(_) => "remove_at",
            Command::UpdateAt { .. } => "update_at",
            Command::Clear => "clear",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::Restore(_) => "restore",
        }
    }
}

impl<T: Item> Command<T> {
    /// Normalize and validate the item payload
    ///
    /// This is the caller-facing validation layer: the reducer assumes its
    /// `Add`/`UpdateAt` payloads already passed through here.
    ///
    /// # Errors
    /// Returns `SetlistError::InvalidArgument` for rejected item content
    pub fn validated(self) -> Result<Self> {
        match self {
            Command::Add(item) => {
                let item = item.normalize();
                item.validate()?;
                Ok(Command::Add(item))
            }
            Command::UpdateAt { index, item } => {
                let item = item.normalize();
                item.validate()?;
                Ok(Command::UpdateAt { index, item })
            }
            Command::Restore(state) => {
                state.validate_items()?;
                Ok(Command::Restore(state))
            }
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SetlistError;

    #[test]
    fn validated_trims_add_payload() {
        let command = Command::Add("  Paranoid Android  ".to_string())
            .validated()
            .unwrap();
        assert_eq!(command, Command::Add("Paranoid Android".to_string()));
    }

    #[test]
    fn validated_rejects_blank_update() {
        let result = Command::UpdateAt {
            index: 0,
            item: "   ".to_string(),
        }
        .validated();
        assert!(matches!(result, Err(SetlistError::InvalidArgument(_))));
    }

    #[test]
    fn validated_passes_navigation_through() {
        let command: Command<String> = Command::Undo;
        assert_eq!(command.validated().unwrap(), Command::Undo);
    }

    #[test]
    fn validated_rejects_restore_with_blank_items() {
        let state = HistoryState::with_present(vec!["ok".to_string(), String::new()]);
        assert!(Command::Restore(state).validated().is_err());
    }

    #[test]
    fn kind_names() {
        assert_eq!(Command::Add("x".to_string()).kind(), "add");
        assert_eq!(Command::<String>::RemoveAt(1).kind(), "remove_at");
    }
}
