//! trackese library root.
//! Exposes the CLI parser, the high-level run() function, and the attendance
//! store, section registry and date helpers it is built on.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod registry;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, home: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg, home),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, home),
        Commands::Section { .. } => cli::commands::section::handle(&cli.command, cfg),
        Commands::Students { .. } => cli::commands::students::handle(&cli.command, cfg),
        Commands::Mark { .. } => cli::commands::mark::handle(&cli.command, cfg),
        Commands::Pending { .. } => cli::commands::pending::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Dates { .. } => cli::commands::dates::handle(&cli.command),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // --home replaces the whole home directory, config file included
    let home = cli
        .home
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::default_home);

    let cfg = Config::load(&home)?;

    dispatch(&cli, &cfg, &home)
}
