use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "framedata")]
#[command(about = "Load fighting-game frame data into SQLite", long_about = None)]
#[command(version)]
struct Cli {
    /// SQLite database file (default: $FRAMEDATA_DB_PATH or data/framedata.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the frame-data payload and load it (default)
    Ingest(IngestArgs),
    /// Create the characters and moves tables, then exit
    Init,
    /// Print character and move counts as JSON
    Stats,
}

#[derive(Args, Default)]
struct IngestArgs {
    /// Source endpoint (default: $FRAMEDATA_SOURCE_URL or the public stats API)
    #[arg(long)]
    url: Option<String>,
    /// Read the payload from a local JSON file instead of fetching it
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,
    /// HTTP timeout in seconds (default: $FRAMEDATA_HTTP_TIMEOUT_SECS or 30)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Commands::Ingest(IngestArgs::default())) {
        Commands::Ingest(args) => commands::ingest::run(cli.db, args).await,
        Commands::Init => commands::schema::init(cli.db),
        Commands::Stats => commands::schema::stats(cli.db),
    }
}
