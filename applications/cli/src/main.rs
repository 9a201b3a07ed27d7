/// Setlist - edit a playlist from the terminal with undo/redo
use clap::Parser;
use setlist_cli::{
    commands::{self, Commands},
    config::CliConfig,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "setlist")]
#[command(about = "Playlist editor with persistent undo/redo history", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "SETLIST_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "setlist=warn,setlist_cli=warn,setlist_history=warn,setlist_storage=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;
    config.validate().map_err(anyhow::Error::msg)?;

    let output = commands::execute(&config, &cli.command).await?;
    println!("{}", output.trim_end());

    Ok(())
}
