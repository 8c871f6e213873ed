//! rTimesplit library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg),
        Commands::Form { .. } => cli::commands::form::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (defaults when the file is missing)
    let cfg_path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::load(&cfg_path)?;

    // 3️⃣ colors: config, then --no-color / NO_COLOR
    ui::messages::set_color(cfg.color && !cli.no_color);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &cfg_path)
}
