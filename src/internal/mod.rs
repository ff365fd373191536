//! The shim's own diagnostics. These write straight to stderr and never pass
//! through the console table, so reporting a problem inside an intercepted
//! call cannot recurse into the interceptor.
//!
//! Uses `OnceLock` so the diagnostics sink is initialized exactly once.

use crate::config::Config;
use crate::fmt::{Color, paint};
use crate::level::{Severity, passes};
use std::io::{self, Write};
use std::sync::OnceLock;

struct InternalLogger {
    threshold: u8,
    colors: bool,
}

static INTERNAL_LOGGER: OnceLock<InternalLogger> = OnceLock::new();

/// Only the first call takes effect; later calls are no-ops.
pub fn init(threshold: u8, colors: bool) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| InternalLogger { threshold, colors });
    if !was_init {
        debug("INTERNAL", &format!("Internal diagnostics at rank {threshold}"));
    }
}

/// Reads the diagnostics rank from `[internal]` and colors from `[terminal]`.
pub fn init_with_config(config: &Config) {
    init(config.internal_rank(), config.terminal.colors);
}

const fn level_color(severity: Severity) -> Color {
    match severity {
        Severity::Log | Severity::Debug => Color::purple(),
        Severity::Info => Color::cyan(),
        Severity::Warn => Color::yellow(),
        Severity::Error => Color::red(),
    }
}

/// Pre-init calls silently vanish rather than crashing.
fn log(severity: Severity, scope: &str, msg: &str) {
    let Some(logger) = INTERNAL_LOGGER.get() else {
        return;
    };
    if !passes(logger.threshold, severity.rank()) {
        return;
    }

    let tag = format!("[shim:{severity}]");
    let tag = if logger.colors {
        paint(&tag, level_color(severity))
    } else {
        tag
    };
    let _ = writeln!(io::stderr(), "{tag} {scope:<10} {msg}");
}

pub fn trace(scope: &str, msg: &str) {
    log(Severity::Log, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Severity::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Severity::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Severity::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Severity::Error, scope, msg);
}
