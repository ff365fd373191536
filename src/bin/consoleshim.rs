//! Command-line front end: bootstraps the shim from the config file and
//! drives the wrapped console.
//!
//! Usage:
//!   consoleshim emit <severity> <message> [--color <color>]
//!   consoleshim rank <name>
//!   consoleshim config
//!   consoleshim panic <message>

use clap::Parser;
use consoleshim::cli::{Cli, Command, cmd_config, cmd_emit, cmd_panic, cmd_rank};
use consoleshim::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Thresholds and sink come from config, so it loads before anything is installed
    let loaded = cli
        .config
        .as_deref()
        .map_or_else(Config::load, Config::load_from);
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Emit {
            severity,
            message,
            color,
        } => cmd_emit(&config, severity.into(), &message, color.map(Into::into)),
        Command::Rank { name } => cmd_rank(&name),
        Command::Config => cmd_config(&config),
        Command::Panic { message } => cmd_panic(&config, &message),
    }
}
