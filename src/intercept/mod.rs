//! Wraps the five console primitives: each wrapped call consults the client
//! threshold before delegating to the original, then always hands a record
//! to the server reporter.
//!
//! The originals are cached inside the installation and never handed back to
//! callers, so a wrapped function can't end up calling itself.

mod bridge;

pub use bridge::LogBridge;

use crate::console::{ConsoleTable, OutputFn};
use crate::fmt::{Arg, colorize};
use crate::level::{Severity, Thresholds};
use crate::record::{ErrorRecord, StackTrace};
use crate::report::Reporter;
use std::sync::Arc;

/// Configured but not yet installed interceptor.
#[derive(Debug, Clone)]
pub struct Interceptor {
    thresholds: Thresholds,
    reporter: Reporter,
    capture_stack: bool,
}

impl Interceptor {
    #[must_use]
    pub const fn new(thresholds: Thresholds, reporter: Reporter) -> Self {
        Self {
            thresholds,
            reporter,
            capture_stack: false,
        }
    }

    /// Attach a backtrace to every record built from a console call.
    #[must_use]
    pub const fn capture_stack(mut self, enabled: bool) -> Self {
        self.capture_stack = enabled;
        self
    }

    /// Caches `target`'s current five functions as the originals and rebinds
    /// every slot to its wrapped version. Consumes the interceptor, so one
    /// interceptor installs exactly once.
    pub fn install(self, target: &mut ConsoleTable) -> Installed {
        let wrapping = Arc::new(Wrapping {
            thresholds: self.thresholds,
            reporter: self.reporter,
            capture_stack: self.capture_stack,
            originals: target.clone(),
        });

        for severity in Severity::all() {
            let wrapping = Arc::clone(&wrapping);
            target.set(
                severity,
                Arc::new(move |args: &[Arg]| wrapping.dispatch(severity, args)),
            );
        }

        Installed { wrapping }
    }
}

struct Wrapping {
    thresholds: Thresholds,
    reporter: Reporter,
    capture_stack: bool,
    originals: ConsoleTable,
}

impl Wrapping {
    fn dispatch(&self, severity: Severity, args: &[Arg]) {
        if self.thresholds.shows(severity) {
            let formatted = colorize(args.to_vec());
            self.originals.call(severity, &formatted);
        }

        let stack = if self.capture_stack {
            StackTrace::capture()
        } else {
            None
        };
        let record = ErrorRecord::from_output(severity, args.first()).with_stack(stack);
        self.reporter.report(&record);
    }
}

/// Live installation. Holds the cached originals.
#[derive(Clone)]
pub struct Installed {
    wrapping: Arc<Wrapping>,
}

impl Installed {
    /// The pre-installation function for `severity`. Crate-internal: the
    /// normalizer needs the original `error` path to surface uncaught errors.
    pub(crate) fn original(&self, severity: Severity) -> OutputFn {
        Arc::clone(self.wrapping.originals.get(severity))
    }

    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        self.wrapping.thresholds
    }

    #[must_use]
    pub fn reporter(&self) -> &Reporter {
        &self.wrapping.reporter
    }
}

impl std::fmt::Debug for Installed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Installed")
            .field("thresholds", &self.wrapping.thresholds)
            .finish_non_exhaustive()
    }
}
