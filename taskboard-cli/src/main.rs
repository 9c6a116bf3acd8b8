//! taskboard: terminal host for the kanban task board.

mod commands;
mod config;
mod logging;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use taskboard_core::storage::local::LocalStorage;
use taskboard_core::BoardSession;

use crate::commands::{CliError, Command, Output};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "Kanban task board kept in a local data directory", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/taskboard/config.json)
    #[arg(long, global = true, env = "TASKBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Data directory, overrides the config file
    #[arg(long, global = true, env = "TASKBOARD_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Print the board as JSON instead of markdown
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("failed to initialize logger: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("[taskboard.cli] {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.unwrap_or_else(config::default_config_path);
    let config = config::load_config(&config_path);
    let data_dir = cli.data_dir.unwrap_or_else(|| config.resolved_data_dir());

    let storage = LocalStorage::open(&data_dir)?;
    log::info!("[taskboard.cli] Using data dir {}", data_dir.display());
    let mut session = BoardSession::open(storage, config.seed_on_first_run)?;

    let output = Output {
        json: cli.json,
        columns: config.columns_shown.clone(),
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute(
        &mut session,
        cli.command.unwrap_or(Command::Show),
        &output,
        &mut out,
    )
}
