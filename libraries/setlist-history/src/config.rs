//! History manager configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the history manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of undo steps kept (default: unbounded)
    ///
    /// When exceeded, the oldest snapshots are discarded first.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Upper bound for a single load or save, in milliseconds (default: 10s)
    ///
    /// `None` waits indefinitely.
    #[serde(default = "default_storage_timeout_ms")]
    pub storage_timeout_ms: Option<u64>,
}

fn default_storage_timeout_ms() -> Option<u64> {
    Some(10_000)
}

impl HistoryConfig {
    /// Storage timeout as a `Duration`
    pub fn storage_timeout(&self) -> Option<Duration> {
        self.storage_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            storage_timeout_ms: default_storage_timeout_ms(),
        }
    }
}
