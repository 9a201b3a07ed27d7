/// Core error types for Setlist
use thiserror::Error;

/// Result type alias using `SetlistError`
pub type Result<T> = std::result::Result<T, SetlistError>;

/// Core error type for Setlist
///
/// None of these are fatal: the history manager stays usable after any of them.
#[derive(Error, Debug)]
pub enum SetlistError {
    /// Item content rejected before it reached the reducer
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Position outside `[0, len)` of the current snapshot
    #[error("Index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Length of the snapshot at the time of the request
        len: usize,
    },

    /// Persisted history could not be read or failed validation
    #[error("Persistence read failure: {0}")]
    PersistenceReadFailure(String),

    /// History could not be written to storage
    #[error("Persistence write failure: {0}")]
    PersistenceWriteFailure(String),

    /// The manager is not accepting commands
    #[error("History manager is not ready")]
    NotReady,

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl SetlistError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a persistence read error
    pub fn read_failure(msg: impl Into<String>) -> Self {
        Self::PersistenceReadFailure(msg.into())
    }

    /// Create a persistence write error
    pub fn write_failure(msg: impl Into<String>) -> Self {
        Self::PersistenceWriteFailure(msg.into())
    }
}
