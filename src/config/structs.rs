//! Configuration struct definitions.

use crate::level::MOST_VERBOSE;
use serde::Deserialize;

/// Threshold pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LevelsConfig {
    /// Rank up to which console output is shown.
    #[serde(alias = "clientLogLevel")]
    pub client_log_level: u8,
    /// Rank up to which records are forwarded to the server sink.
    #[serde(alias = "serverLogLevel")]
    pub server_log_level: u8,
}

impl Default for LevelsConfig {
    fn default() -> Self {
        Self {
            client_log_level: MOST_VERBOSE,
            server_log_level: MOST_VERBOSE,
        }
    }
}

/// Terminal console configuration (native host).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Enable terminal output. Disabled means the original primitives print nothing.
    pub enabled: bool,
    /// Render `%c` color styles as ANSI escapes.
    pub colors: bool,
    /// Prefix each line with its severity.
    pub tags: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
            tags: true,
        }
    }
}

/// Server sink selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// Sink kind (none, jsonl).
    pub kind: String,
    /// Target file for the jsonl sink.
    pub path: Option<String>,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            kind: "none".to_string(),
            path: None,
        }
    }
}

/// Stack capture for intercepted console calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Attach a backtrace to every record (effective only when the runtime captures backtraces).
    pub capture: bool,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self { capture: true }
    }
}

/// The shim's own diagnostics.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InternalConfig {
    /// Most verbose severity printed by the shim about itself.
    pub level: String,
}

impl Default for InternalConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
