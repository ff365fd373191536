//! The five console output primitives and the rebindable table that holds them.
//!
//! A [`Console`] is what the host provides. A [`ConsoleTable`] is what code
//! calls: five slots, one per severity, that the interceptor rebinds to its
//! wrapped versions. Bootstrap freezes one table as the process-wide binding
//! behind the free functions [`log`], [`debug`], [`info`], [`warn`] and [`error`].

mod terminal;

pub use terminal::TerminalConsole;

use crate::fmt::Arg;
use crate::level::Severity;
use std::sync::{Arc, OnceLock};

/// Host-provided output primitives.
pub trait Console: Send + Sync {
    fn emit(&self, severity: Severity, args: &[Arg]);
}

impl<C: Console + ?Sized> Console for Arc<C> {
    fn emit(&self, severity: Severity, args: &[Arg]) {
        (**self).emit(severity, args);
    }
}

/// One bound output function. Return values are discarded by construction.
pub type OutputFn = Arc<dyn Fn(&[Arg]) + Send + Sync>;

/// Five rebindable output slots, indexed by severity.
#[derive(Clone)]
pub struct ConsoleTable {
    slots: [OutputFn; 5],
}

impl ConsoleTable {
    /// Binds every slot to the matching primitive of `console`.
    #[must_use]
    pub fn from_console(console: Arc<dyn Console>) -> Self {
        let slots = Severity::all().map(|severity| {
            let console = Arc::clone(&console);
            Arc::new(move |args: &[Arg]| console.emit(severity, args)) as OutputFn
        });
        Self { slots }
    }

    /// Every slot does nothing.
    #[must_use]
    pub fn silent() -> Self {
        let noop: OutputFn = Arc::new(|_: &[Arg]| {});
        Self {
            slots: Severity::all().map(|_| Arc::clone(&noop)),
        }
    }

    #[must_use]
    pub fn get(&self, severity: Severity) -> &OutputFn {
        &self.slots[severity.index()]
    }

    pub fn set(&mut self, severity: Severity, output: OutputFn) {
        self.slots[severity.index()] = output;
    }

    pub fn call(&self, severity: Severity, args: &[Arg]) {
        (self.get(severity))(args);
    }

    pub fn log(&self, args: &[Arg]) {
        self.call(Severity::Log, args);
    }

    pub fn debug(&self, args: &[Arg]) {
        self.call(Severity::Debug, args);
    }

    pub fn info(&self, args: &[Arg]) {
        self.call(Severity::Info, args);
    }

    pub fn warn(&self, args: &[Arg]) {
        self.call(Severity::Warn, args);
    }

    pub fn error(&self, args: &[Arg]) {
        self.call(Severity::Error, args);
    }
}

impl std::fmt::Debug for ConsoleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleTable").finish_non_exhaustive()
    }
}

static PROCESS_CONSOLE: OnceLock<ConsoleTable> = OnceLock::new();

/// Makes `table` the process-wide binding. Only the first call takes effect.
pub(crate) fn bind_process(table: ConsoleTable) -> bool {
    PROCESS_CONSOLE.set(table).is_ok()
}

/// The process-wide table, once bootstrap has bound it.
#[must_use]
pub fn process() -> Option<&'static ConsoleTable> {
    PROCESS_CONSOLE.get()
}

/// Calls before bootstrap silently vanish.
pub fn call(severity: Severity, args: &[Arg]) {
    if let Some(table) = PROCESS_CONSOLE.get() {
        table.call(severity, args);
    }
}

pub fn log(args: &[Arg]) {
    call(Severity::Log, args);
}

pub fn debug(args: &[Arg]) {
    call(Severity::Debug, args);
}

pub fn info(args: &[Arg]) {
    call(Severity::Info, args);
}

pub fn warn(args: &[Arg]) {
    call(Severity::Warn, args);
}

pub fn error(args: &[Arg]) {
    call(Severity::Error, args);
}
