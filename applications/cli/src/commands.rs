/// Subcommands and the code that runs them against a history store
use crate::config::{Backend, CliConfig};
use crate::render;
use clap::Subcommand;
use setlist_core::{Command, PersistenceAdapter, SetlistError};
use setlist_history::{CommandDispatcher, HistoryConfig};
use setlist_storage::{FilePersistence, SqlitePersistence};

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the playlist
    Show,
    /// Append a song
    Add {
        /// Song name
        name: String,
    },
    /// Remove the song at a position (1-based)
    Remove {
        /// Position in the playlist
        position: usize,
    },
    /// Rename the song at a position (1-based)
    Rename {
        /// Position in the playlist
        position: usize,
        /// New song name
        name: String,
    },
    /// Remove every song (undoable)
    Clear,
    /// Undo the last change
    Undo,
    /// Redo the last undone change
    Redo,
    /// Print every snapshot on the undo/redo timeline
    History,
}

impl Commands {
    /// History command to dispatch, or `None` for read-only subcommands
    ///
    /// # Errors
    /// Returns an error for position 0
    pub fn to_command(&self) -> anyhow::Result<Option<Command<String>>> {
        let command = match self {
            Commands::Show | Commands::History => return Ok(None),
            Commands::Add { name } => Command::Add(name.clone()),
            Commands::Remove { position } => Command::RemoveAt(to_index(*position)?),
            Commands::Rename { position, name } => Command::UpdateAt {
                index: to_index(*position)?,
                item: name.clone(),
            },
            Commands::Clear => Command::Clear,
            Commands::Undo => Command::Undo,
            Commands::Redo => Command::Redo,
        };
        Ok(Some(command))
    }
}

/// Convert a 1-based position from the command line
///
/// # Errors
/// Returns an error for position 0
pub fn to_index(position: usize) -> anyhow::Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("positions start at 1"))
}

/// Open the configured store and run one subcommand, returning the rendered output
///
/// # Errors
/// Returns an error if the store cannot be opened, the command is rejected,
/// or the change could not be saved
pub async fn execute(config: &CliConfig, command: &Commands) -> anyhow::Result<String> {
    match config.storage.backend {
        Backend::Sqlite => {
            let adapter =
                SqlitePersistence::connect(&config.storage.database_url, config.storage.scope.clone())
                    .await?;
            run(adapter, &config.history, command).await
        }
        Backend::File => {
            let dir = config.storage.data_dir.join(&config.storage.scope);
            run(FilePersistence::new(dir), &config.history, command).await
        }
    }
}

/// Run one subcommand against `adapter`
///
/// The history is hydrated from the adapter, the command applied, and the
/// result flushed before returning.
///
/// # Errors
/// Returns an error if the command is rejected or the change could not be saved
pub async fn run<A>(adapter: A, history: &HistoryConfig, command: &Commands) -> anyhow::Result<String>
where
    A: PersistenceAdapter<String> + 'static,
{
    let dispatch = command.to_command()?;

    tracing::debug!(store = %adapter.describe(), "Opening history");
    let dispatcher = CommandDispatcher::open(adapter, history.clone()).await;

    let outcome = match dispatch {
        Some(dispatch) => dispatcher.dispatch(dispatch).await,
        None => Ok(dispatcher.current()),
    };

    dispatcher.shutdown().await;

    let state = outcome.map_err(to_positions)?;
    if dispatcher.persistence_stats().failed > 0 {
        anyhow::bail!("change applied but could not be saved (see log output)");
    }

    Ok(match command {
        Commands::History => render::timeline(&state),
        _ => render::playlist(&state),
    })
}

/// Report positions the way the command line takes them
fn to_positions(err: SetlistError) -> anyhow::Error {
    match err {
        SetlistError::IndexOutOfRange { index, len } => anyhow::anyhow!(
            "position {} is out of range (playlist has {} {})",
            index + 1,
            len,
            if len == 1 { "song" } else { "songs" }
        ),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based() {
        assert_eq!(to_index(1).unwrap(), 0);
        assert_eq!(to_index(12).unwrap(), 11);
        assert!(to_index(0).is_err());
    }

    #[test]
    fn read_only_subcommands_dispatch_nothing() {
        assert_eq!(Commands::Show.to_command().unwrap(), None);
        assert_eq!(Commands::History.to_command().unwrap(), None);
    }

    #[test]
    fn rename_maps_to_update_at() {
        let command = Commands::Rename {
            position: 3,
            name: "Encore".to_string(),
        };
        assert_eq!(
            command.to_command().unwrap(),
            Some(Command::UpdateAt {
                index: 2,
                item: "Encore".to_string()
            })
        );
    }

    #[test]
    fn out_of_range_is_reported_one_based() {
        let err = to_positions(SetlistError::IndexOutOfRange { index: 8, len: 1 });
        assert_eq!(err.to_string(), "position 9 is out of range (playlist has 1 song)");
    }
}
