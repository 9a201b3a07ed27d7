/// Plain-text rendering of a playlist history
use setlist_core::HistoryState;
use std::fmt::Write;

/// Numbered playlist followed by the undo/redo counters
pub fn playlist(state: &HistoryState<String>) -> String {
    let mut out = String::new();

    if state.is_empty() {
        out.push_str("Your playlist is empty\n");
    } else {
        for (position, name) in state.present.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {}", position + 1, name);
        }
    }

    let _ = write!(out, "undo: {}  redo: {}", state.undo_depth(), state.redo_depth());
    out
}

/// Every snapshot on the timeline, oldest first, with the present marked
pub fn timeline(state: &HistoryState<String>) -> String {
    let mut out = String::new();

    let entries = state
        .past
        .iter()
        .map(|s| (false, s))
        .chain(std::iter::once((true, &state.present)))
        .chain(state.future.iter().map(|s| (false, s)));

    for (step, (is_present, snapshot)) in entries.enumerate() {
        let marker = if is_present { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} {step:>3}  [{}]", snapshot.join(", "));
    }

    out
}
