//! coverwalk: solve minimum covering-walk maps from the command line.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod inputs;

#[derive(Parser)]
#[command(name = "coverwalk", version, about = "Minimum covering-walk solver")]
struct Cli {
    /// Worker threads for the search pool (defaults to CPU count - 1).
    #[arg(long, global = true, env = "COVERWALK_THREADS")]
    threads: Option<usize>,

    /// Path to a TOML configuration file.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Emit results as JSON instead of the textual trace.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a single map file.
    Run {
        /// Map file, named `<yyyymmdd>_map_<edges...>_<start>.<ext>`.
        file: PathBuf,
    },
    /// Solve every date-prefixed map file in a directory.
    RunAll {
        /// Directory containing map files.
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let search = commands::resolve_search_config(cli.config.as_deref(), cli.threads)?;

    match cli.command {
        Command::Run { file } => commands::cmd_run(&file, &search, cli.json),
        Command::RunAll { dir } => commands::cmd_run_all(&dir, &search, cli.json),
    }
}
