use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = cmd
    {
        // ---- INIT CONFIG ----
        if *init {
            Config::init(path, *force)?;
            success(format!("Config file: {}", path.display()));
        }

        // ---- PRINT CONFIG ----
        if *print_config || !*init {
            info(format!("Configuration ({}):\n", path.display()));
            println!("{}", cfg.to_yaml()?);
        }
    }
    Ok(())
}
