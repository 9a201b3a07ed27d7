//! Property-based tests for the history reducer
//!
//! Uses proptest to verify history invariants across random edit sequences.

use proptest::prelude::*;
use setlist_core::{codec, Command, HistoryState, SetlistError};
use setlist_history::{apply, HistoryStore};

// ===== Helpers =====

fn arbitrary_command() -> impl Strategy<Value = Command<String>> {
    prop_oneof![
        3 => "[A-Za-z][A-Za-z ]{0,15}".prop_map(Command::Add),
        1 => (0usize..12).prop_map(Command::RemoveAt),
        1 => (0usize..12, "[A-Za-z]{1,10}").prop_map(|(index, item)| Command::UpdateAt { index, item }),
        1 => Just(Command::Clear),
        2 => Just(Command::Undo),
        2 => Just(Command::Redo),
    ]
}

fn arbitrary_commands() -> impl Strategy<Value = Vec<Command<String>>> {
    prop::collection::vec(arbitrary_command(), 0..40)
}

/// Run commands, skipping the ones the reducer rejects
fn build(commands: Vec<Command<String>>) -> HistoryState<String> {
    commands.into_iter().fold(HistoryState::new(), |state, command| {
        apply(&state, command).unwrap_or(state)
    })
}

// ===== Property Tests =====

proptest! {
    /// Property: apply is pure and repeatable
    #[test]
    fn apply_is_pure(commands in arbitrary_commands(), next in arbitrary_command()) {
        let state = build(commands);
        let before = state.clone();

        let first = apply(&state, next.clone());
        let second = apply(&state, next);

        prop_assert_eq!(&state, &before);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "same input produced different outcomes"),
        }
    }

    /// Property: undo followed by redo is the identity whenever undo is possible
    #[test]
    fn undo_then_redo_round_trips(commands in arbitrary_commands()) {
        let state = build(commands);
        prop_assume!(state.can_undo());

        let undone = apply(&state, Command::Undo).unwrap();
        let redone = apply(&undone, Command::Redo).unwrap();
        prop_assert_eq!(redone, state);
    }

    /// Property: redo followed by undo is the identity whenever redo is possible
    #[test]
    fn redo_then_undo_round_trips(commands in arbitrary_commands()) {
        let state = build(commands);
        prop_assume!(state.can_redo());

        let redone = apply(&state, Command::Redo).unwrap();
        let undone = apply(&redone, Command::Undo).unwrap();
        prop_assert_eq!(undone, state);
    }

    /// Property: total snapshot count changes by exactly one per recorded edit
    #[test]
    fn each_transition_moves_one_snapshot(commands in arbitrary_commands(), next in arbitrary_command()) {
        let state = build(commands);
        let total = state.undo_depth() + state.redo_depth();

        if let Ok(after) = apply(&state, next.clone()) {
            let after_total = after.undo_depth() + after.redo_depth();
            match next {
                Command::Undo | Command::Redo => prop_assert_eq!(after_total, total),
                _ if after == state => {}
                _ => {
                    prop_assert_eq!(after.undo_depth(), state.undo_depth() + 1);
                    prop_assert_eq!(after.redo_depth(), 0);
                }
            }
        }
    }

    /// Property: every recorded edit discards the redo path
    #[test]
    fn edits_clear_future(commands in arbitrary_commands(), item in "[A-Za-z]{1,8}") {
        let state = build(commands);
        let after = apply(&state, Command::Add(item)).unwrap();
        prop_assert!(after.future.is_empty());
        prop_assert_eq!(after.past.back(), Some(&state.present));
    }

    /// Property: out-of-range positions are rejected and nothing changes
    #[test]
    fn out_of_range_is_rejected(commands in arbitrary_commands(), offset in 0usize..5) {
        let state = build(commands);
        let index = state.len() + offset;

        let result = apply(&state, Command::RemoveAt(index));
        prop_assert!(
            matches!(result, Err(SetlistError::IndexOutOfRange { .. })),
            "remove at {} should fail",
            index
        );

        let result = apply(&state, Command::UpdateAt { index, item: "X".to_string() });
        prop_assert!(
            matches!(result, Err(SetlistError::IndexOutOfRange { .. })),
            "update at {} should fail",
            index
        );
    }

    /// Property: a bounded store never exceeds its undo depth
    #[test]
    fn bounded_store_respects_max_depth(max_depth in 0usize..8, commands in arbitrary_commands()) {
        let mut store = HistoryStore::new(Some(max_depth));
        for command in commands {
            let _ = store.apply(command);
            prop_assert!(store.state().undo_depth() <= max_depth);
        }
    }

    /// Property: persisted record text reproduces the history exactly
    #[test]
    fn record_preserves_history(commands in arbitrary_commands()) {
        let state = build(commands);
        let decoded: HistoryState<String> = codec::decode(&codec::encode(&state).unwrap()).unwrap();
        prop_assert_eq!(decoded, state);
    }
}
