//! Process start: installs the uncaught-error hook, then the console
//! interceptor, exactly once per process.
//!
//! A second `start` is a no-op reporting [`Started::AlreadyRunning`];
//! wrapping the already wrapped primitives again would double every call.

use crate::config::Config;
use crate::console::{self, Console, ConsoleTable};
use crate::internal;
use crate::intercept::{Installed, Interceptor, LogBridge};
use crate::level::Thresholds;
use crate::normalize::{Normalizer, panic_input};
use crate::record::RawErrorInput;
use crate::report::{Reporter, ServerSink};
use std::sync::{Arc, OnceLock};

/// Outcome of [`start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Started {
    /// This call installed the hook and the interceptor.
    Installed,
    /// An earlier call already did; nothing was changed.
    AlreadyRunning,
}

/// Everything bootstrap installed. Lives for the rest of the process.
#[derive(Debug)]
pub struct Shim {
    console: ConsoleTable,
    normalizer: Normalizer,
    installed: Installed,
    facade_bound: bool,
}

impl Shim {
    /// The wrapped console table (same binding as the `console::*` free functions).
    #[must_use]
    pub const fn console(&self) -> &ConsoleTable {
        &self.console
    }

    /// Body of the uncaught-error hook, for hosts that deliver errors through
    /// their own callback. Returns `true` to suppress the host's default surfacing.
    pub fn handle_uncaught(&self, input: RawErrorInput) -> bool {
        self.normalizer.handle(input)
    }

    #[must_use]
    pub fn thresholds(&self) -> Thresholds {
        self.installed.thresholds()
    }

    /// Whether the `log` facade routes through the wrapped table. False when
    /// another logger was bound first.
    #[must_use]
    pub const fn facade_bound(&self) -> bool {
        self.facade_bound
    }
}

static SHIM: OnceLock<Shim> = OnceLock::new();

/// The running shim, once [`start`] has been called.
#[must_use]
pub fn shim() -> Option<&'static Shim> {
    SHIM.get()
}

/// Starts with the terminal console and the sink selected by `config`.
pub fn start(config: &Config) -> Started {
    start_with(config, Arc::new(config.build_console()), config.build_sink())
}

/// Starts with injected host console and server sink.
pub fn start_with(
    config: &Config,
    host: Arc<dyn Console>,
    sink: Arc<dyn ServerSink>,
) -> Started {
    let mut started = Started::AlreadyRunning;
    SHIM.get_or_init(|| {
        started = Started::Installed;
        install(config, host, sink)
    });

    if started == Started::AlreadyRunning {
        internal::debug("BOOTSTRAP", "Already running, start ignored");
    }
    started
}

fn install(config: &Config, host: Arc<dyn Console>, sink: Arc<dyn ServerSink>) -> Shim {
    internal::init_with_config(config);

    let thresholds = config.thresholds();
    internal::debug(
        "BOOTSTRAP",
        &format!(
            "Thresholds: client={} server={}",
            thresholds.client, thresholds.server
        ),
    );

    let mut table = ConsoleTable::from_console(host);
    let reporter = Reporter::new(thresholds.server, sink);

    // Wrapping the local table has no effect until it is bound below, so the
    // hook still goes live before any caller sees the interceptor.
    let installed = Interceptor::new(thresholds, reporter)
        .capture_stack(config.stack.capture)
        .install(&mut table);

    let normalizer = Normalizer::for_installation(&installed);
    install_panic_hook(normalizer.clone(), config.stack.capture);

    if !console::bind_process(table.clone()) {
        internal::warn("BOOTSTRAP", "Process console already bound");
    }

    let facade_bound = match LogBridge::new(table.clone()).install() {
        Ok(()) => true,
        Err(e) => {
            internal::warn("BOOTSTRAP", &format!("log facade not bound: {e}"));
            false
        }
    };

    internal::debug("BOOTSTRAP", "Console interceptor installed");

    Shim {
        console: table,
        normalizer,
        installed,
        facade_bound,
    }
}

/// Chains to the previous hook only when the reporter declines to suppress.
fn install_panic_hook(normalizer: Normalizer, capture_stack: bool) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let suppress = normalizer.handle(panic_input(info, capture_stack));
        if !suppress {
            previous(info);
        }
    }));
    internal::debug("BOOTSTRAP", "Uncaught-error hook installed");
}
