//! File-backed persistence adapter

use async_trait::async_trait;
use setlist_core::codec::{self, HISTORY_KEY};
use setlist_core::{HistoryState, Item, PersistenceAdapter, Result, SetlistError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores the history record as `<dir>/<key>.json`
///
/// Writes go to a sibling temp file that is then renamed over the target,
/// so a crash mid-write leaves the previous record intact.
#[derive(Debug, Clone)]
pub struct FilePersistence {
    path: PathBuf,
}

impl FilePersistence {
    /// Adapter for the playlist history key in `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_key(dir, HISTORY_KEY)
    }

    /// Adapter for a custom key in `dir`
    pub fn with_key(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// File the record is written to
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl<T: Item> PersistenceAdapter<T> for FilePersistence {
    async fn load(&self) -> Result<Option<HistoryState<T>>> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SetlistError::read_failure(format!(
                    "{}: {e}",
                    self.path.display()
                )))
            }
        };

        codec::decode(&text).map(Some)
    }

    async fn save(&self, state: &HistoryState<T>) -> Result<()> {
        let text = codec::encode(state)?;
        let temp = self.temp_path();

        let write = async {
            if let Some(parent) = self.path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&temp, text.as_bytes()).await?;
            tokio::fs::rename(&temp, &self.path).await
        };

        write
            .await
            .map_err(|e| SetlistError::write_failure(format!("{}: {e}", self.path.display())))
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
