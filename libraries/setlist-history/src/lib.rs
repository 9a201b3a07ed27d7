//! Setlist - History Management
//!
//! Linear undo/redo history for an editable list, with durable persistence.
//!
//! This crate provides:
//! - A pure reducer ([`apply`]) for add, remove, rename, clear, undo, redo, restore
//! - A bounded [`HistoryStore`] (optional maximum undo depth)
//! - A [`CommandDispatcher`] that serializes commands FIFO and persists every
//!   committed change on a background task
//!
//! # Architecture
//!
//! `setlist-history` knows nothing about storage media or rendering:
//! - Persistence goes through `setlist_core::PersistenceAdapter`
//! - Readers observe committed state through a watch channel
//! - Storage failures are logged and never block or roll back an edit
//!
//! # Example: Pure Transitions
//!
//! ```rust
//! use setlist_history::apply;
//! use setlist_core::{Command, HistoryState};
//!
//! let state = HistoryState::new();
//! let state = apply(&state, Command::Add("A".to_string())).unwrap();
//! let state = apply(&state, Command::Add("B".to_string())).unwrap();
//! let state = apply(&state, Command::Undo).unwrap();
//! assert_eq!(state.present, vec!["A".to_string()]);
//!
//! let state = apply(&state, Command::Redo).unwrap();
//! assert_eq!(state.present, vec!["A".to_string(), "B".to_string()]);
//! ```
//!
//! # Example: Dispatcher
//!
//! ```rust,no_run
//! use setlist_history::{CommandDispatcher, HistoryConfig};
//! use setlist_storage::MemoryPersistence;
//!
//! # async fn example() -> setlist_core::Result<()> {
//! let dispatcher: CommandDispatcher<String> =
//!     CommandDispatcher::open(MemoryPersistence::new(), HistoryConfig::default()).await;
//!
//! dispatcher.add("Karma Police".to_string()).await?;
//! dispatcher.add("No Surprises".to_string()).await?;
//! dispatcher.undo().await?;
//!
//! assert_eq!(dispatcher.current().present, vec!["Karma Police".to_string()]);
//! dispatcher.shutdown().await;
//! # Ok(())
//! # }
//! ```

mod config;
mod dispatcher;
mod reducer;
mod store;
mod writer;

// Public exports
pub use config::HistoryConfig;
pub use dispatcher::CommandDispatcher;
pub use reducer::apply;
pub use store::HistoryStore;
pub use writer::PersistenceStats;
