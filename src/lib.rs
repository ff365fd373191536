// wasm-bindgen generates unsafe glue, so the web feature cannot forbid it
#![cfg_attr(not(feature = "web"), forbid(unsafe_code))]

//! `consoleshim` - console interception with level filtering and server-side error reporting.
//!
//! Wraps the five console output primitives (`log`, `debug`, `info`, `warn`,
//! `error`) and the host's uncaught-error hook:
//! - output below the client threshold is dropped, the rest is colorized and
//!   passed to the original primitive
//! - every call and every uncaught error becomes an [`ErrorRecord`] that the
//!   [`Reporter`] forwards to a [`ServerSink`] when the server threshold allows
//! - on a native host the `log` facade and panics are intercepted the same way
//!
//! # Example
//!
//! ```
//! use consoleshim::{Config, NullSink, Reporter, Interceptor, ConsoleTable, TerminalConsole};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let config = Config::from_toml("[levels]\nclient_log_level = 3").unwrap();
//! let mut table = ConsoleTable::from_console(Arc::new(TerminalConsole::new()));
//! let reporter = Reporter::new(config.thresholds().server, Arc::new(NullSink));
//! let _installed = Interceptor::new(config.thresholds(), reporter).install(&mut table);
//!
//! table.info(&[json!("shown"), json!("green")]);
//! table.debug(&[json!("dropped, but still reported")]);
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `consoleshim` command-line front end
//! - `web`: Enables the browser host (`console.*`, `window.onerror`)

pub mod bootstrap;
pub mod config;
pub mod console;
mod error;
pub mod fmt;
pub mod intercept;
pub mod internal;
pub mod level;
pub mod normalize;
pub mod record;
pub mod report;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "web")]
pub mod web;

pub use bootstrap::{Shim, Started, start, start_with};
pub use config::Config;
pub use console::{Console, ConsoleTable, OutputFn, TerminalConsole};
pub use error::Error;
pub use fmt::{Arg, ConsoleColor, colorize};
pub use intercept::{Installed, Interceptor, LogBridge};
pub use level::{Severity, Thresholds, rank_of};
pub use normalize::Normalizer;
pub use record::{ErrorObject, ErrorRecord, RawErrorInput, StackTrace};
pub use report::{FnSink, JsonLinesSink, NullSink, Reporter, ServerSink};
