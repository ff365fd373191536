//! CLI module for consoleshim.
//!
//! This module provides the command-line interface using Clap.

mod commands;

pub use commands::{cmd_config, cmd_emit, cmd_panic, cmd_rank};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Severity for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SeverityArg {
    Log,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<SeverityArg> for crate::level::Severity {
    fn from(severity: SeverityArg) -> Self {
        match severity {
            SeverityArg::Log => Self::Log,
            SeverityArg::Debug => Self::Debug,
            SeverityArg::Info => Self::Info,
            SeverityArg::Warn => Self::Warn,
            SeverityArg::Error => Self::Error,
        }
    }
}

/// Color keyword for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ColorArg {
    Green,
    Orange,
    Blue,
    Red,
}

impl From<ColorArg> for crate::fmt::ConsoleColor {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Green => Self::Green,
            ColorArg::Orange => Self::Orange,
            ColorArg::Blue => Self::Blue,
            ColorArg::Red => Self::Red,
        }
    }
}

/// consoleshim - drive the console interceptor from the command line.
#[derive(Parser)]
#[command(
    name = "consoleshim",
    version,
    about = "Console interception with level filtering and error reporting"
)]
pub struct Cli {
    /// Config file (defaults to ~/.config/consoleshim/consoleshim.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Send a message through a wrapped console primitive.
    Emit {
        /// Console primitive
        #[arg(value_enum)]
        severity: SeverityArg,
        /// Message
        message: Vec<String>,
        /// Color keyword passed as second argument
        #[arg(long, value_enum)]
        color: Option<ColorArg>,
    },
    /// Print the rank of a severity name.
    Rank {
        /// Severity name
        name: String,
    },
    /// Show the effective configuration.
    Config,
    /// Raise an uncaught error to exercise the error hook.
    Panic {
        /// Panic message
        message: Vec<String>,
    },
}
