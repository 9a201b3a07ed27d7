//! Setlist Core
//!
//! Platform-agnostic types, traits, and error handling for the Setlist
//! playlist editor.
//!
//! This crate provides the building blocks shared by the history manager,
//! the storage adapters, and the command-line front end.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `HistoryState`, `Snapshot`, `Command`
//! - **Item Contract**: the `Item` trait every list element implements
//! - **Persistence Seam**: the `PersistenceAdapter` trait
//! - **Record Format**: the versioned JSON codec in [`codec`]
//! - **Error Handling**: Unified `SetlistError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use setlist_core::{Command, HistoryState};
//!
//! let state: HistoryState<String> = HistoryState::new();
//! assert!(state.is_pristine());
//!
//! let command = Command::Add("  Teardrop ".to_string()).validated().unwrap();
//! assert_eq!(command, Command::Add("Teardrop".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod codec;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SetlistError};
pub use traits::PersistenceAdapter;
pub use types::{Command, HistoryState, Item, Snapshot};
