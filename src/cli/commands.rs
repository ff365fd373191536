//! Subcommand handlers. Each owns its own argument checks and exit code.

use crate::bootstrap;
use crate::config::Config;
use crate::console;
use crate::fmt::ConsoleColor;
use crate::internal;
use crate::level::{self, Severity};
use serde_json::Value;
use std::process::ExitCode;

/// Bootstraps, then calls the wrapped primitive once.
#[must_use]
pub fn cmd_emit(
    config: &Config,
    severity: Severity,
    message: &[String],
    color: Option<ConsoleColor>,
) -> ExitCode {
    bootstrap::start(config);

    let mut args = vec![Value::String(message.join(" "))];
    if let Some(color) = color {
        args.push(Value::String(color.as_str().to_string()));
    }
    console::call(severity, &args);
    ExitCode::SUCCESS
}

#[must_use]
pub fn cmd_rank(name: &str) -> ExitCode {
    match level::rank_of(name) {
        Ok(rank) => {
            println!("{rank}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[must_use]
pub fn cmd_config(config: &Config) -> ExitCode {
    let thresholds = config.thresholds();
    println!("client_log_level = {}", thresholds.client);
    println!("server_log_level = {}", thresholds.server);
    for severity in Severity::all() {
        println!(
            "  {:<5} rank {}  shown={:<5}  forwarded={}",
            severity.as_str(),
            severity.rank(),
            thresholds.shows(severity),
            thresholds.forwards(severity)
        );
    }
    println!("sink = {:?}", config.parse_sink_kind());
    println!("stack.capture = {}", config.stack.capture);
    ExitCode::SUCCESS
}

/// Bootstraps and panics. The hook reports the panic and suppresses the default message.
pub fn cmd_panic(config: &Config, message: &[String]) -> ExitCode {
    bootstrap::start(config);
    internal::debug("CLI", "Raising uncaught error");
    panic!("{}", message.join(" "));
}
