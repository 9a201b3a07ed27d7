//! Persisted history record format
//!
//! A history is stored as one JSON document:
//!
//! ```json
//! { "version": 1, "past": [["A"]], "present": ["A", "B"], "future": [] }
//! ```
//!
//! Records written before versioning (no `version` field) are read as
//! version 1. Decoding performs the structural validation required before a
//! stored history may be accepted: `present` must be a sequence, `past` and
//! `future` sequences of sequences, and every element must decode as the
//! item type and pass [`Item::validate`].

use crate::error::{Result, SetlistError};
use crate::types::{HistoryState, Item, Snapshot};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Well-known storage key for the playlist history
pub const HISTORY_KEY: &str = "playlist.history.v1";

/// Current record version
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct RecordRef<'a, T> {
    version: u32,
    past: &'a VecDeque<Snapshot<T>>,
    present: &'a Snapshot<T>,
    future: &'a VecDeque<Snapshot<T>>,
}

#[derive(Deserialize)]
struct Record<T> {
    #[serde(default = "unversioned")]
    version: u32,
    past: VecDeque<Snapshot<T>>,
    present: Snapshot<T>,
    future: VecDeque<Snapshot<T>>,
}

fn unversioned() -> u32 {
    1
}

/// Serialize a history to its record text
///
/// # Errors
/// Returns `SetlistError::Serialization` if an item fails to serialize
pub fn encode<T: Item>(state: &HistoryState<T>) -> Result<String> {
    let record = RecordRef {
        version: FORMAT_VERSION,
        past: &state.past,
        present: &state.present,
        future: &state.future,
    };
    Ok(serde_json::to_string(&record)?)
}

/// Parse and validate record text
///
/// # Errors
/// Returns `SetlistError::PersistenceReadFailure` for malformed JSON, a wrong
/// shape, an unsupported version, or items that fail validation
pub fn decode<T: Item>(text: &str) -> Result<HistoryState<T>> {
    let record: Record<T> = serde_json::from_str(text)
        .map_err(|e| SetlistError::read_failure(format!("malformed history record: {e}")))?;

    if record.version == 0 || record.version > FORMAT_VERSION {
        return Err(SetlistError::read_failure(format!(
            "unsupported history record version {}",
            record.version
        )));
    }

    let state = HistoryState {
        past: record.past,
        present: record.present,
        future: record.future,
    };

    state
        .validate_items()
        .map_err(|e| SetlistError::read_failure(format!("invalid item in history record: {e}")))?;

    Ok(state)
}
