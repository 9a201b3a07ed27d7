mod command;
mod history;
mod item;

pub use command::Command;
pub use history::{HistoryState, Snapshot};
pub use item::Item;
