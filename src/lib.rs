//! rWorkday library root.
//! Exposes the time-accounting core, the CLI parser and the high-level run()
//! function used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::Context;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, ctx),
        Commands::Track { .. } => cli::commands::track::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging before anything else reports
    logging::init(cli.verbose);

    // 3️⃣ resolve and load config ONCE
    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);

    // `init` must work even over a broken file
    let cfg = if matches!(cli.command, Commands::Init { .. }) {
        Config::default()
    } else {
        Config::load(&config_path)?
    };

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &Context { config_path, cfg })
}
