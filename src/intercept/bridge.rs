//! Binds the `log` facade to a console table, so `log::info!` and friends
//! anywhere in the process go through the wrapped primitives.

use crate::console::ConsoleTable;
use crate::fmt::ConsoleColor;
use crate::level::Severity;
use serde_json::Value;

/// `log::Log` implementation over a (wrapped) console table.
///
/// A target naming a color keyword (`log::info!(target: "green", ...)`) is
/// passed as the second argument and therefore colorizes the line.
#[derive(Debug, Clone)]
pub struct LogBridge {
    table: ConsoleTable,
}

impl LogBridge {
    #[must_use]
    pub const fn new(table: ConsoleTable) -> Self {
        Self { table }
    }

    /// Registers the bridge as the process-wide `log` implementation.
    ///
    /// Every level is enabled at the facade: filtering belongs to the wrapped
    /// table, which still reports messages it does not show.
    ///
    /// # Errors
    /// Fails when another logger is already bound to the facade.
    pub fn install(self) -> Result<(), crate::Error> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let mut args = vec![Value::String(record.args().to_string())];
        if record.target().parse::<ConsoleColor>().is_ok() {
            args.push(Value::String(record.target().to_string()));
        }
        self.table.call(Severity::from(record.level()), &args);
    }

    fn flush(&self) {}
}
