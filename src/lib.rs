//! rAttendance library root.
//! Exposes the CLI parser, the high-level run() function and the pipeline
//! modules (import → core → export).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: Config) -> AppResult<()> {
    match &cli.command {
        Commands::Run { .. } => cli::commands::run::handle(&cli.command, cfg),
        Commands::Inspect { .. } => cli::commands::inspect::handle(&cli.command, cfg),
        Commands::Config { .. } => {
            cli::commands::config::handle(&cli.command, &cfg, &config_path(cli))
        }
    }
}

fn config_path(cli: &Cli) -> PathBuf {
    cli.config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ log stream
    utils::logger::init_logger(cli.verbose);

    // 3️⃣ load config once; `config --init` must work even without a valid file
    let explicit = cli.config.as_deref().map(expand_tilde);
    let cfg = match (Config::load(explicit.as_deref()), &cli.command) {
        (Ok(cfg), _) => cfg,
        (Err(e), Commands::Config { init: true, .. }) => {
            tracing::debug!("Ignoring unreadable configuration before init: {e}");
            Config::default()
        }
        (Err(e), _) => return Err(e),
    };

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, cfg)
}
